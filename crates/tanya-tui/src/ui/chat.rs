//! Scrollable chat feed — user messages on one side, agent replies on the
//! other, with a typing indicator while a reply is pending.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use tanya_core::types::Sender;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.assistant_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Build display lines from messages (bottom-up with scroll offset)
    let visible_height = inner.height as usize;
    let total = app.messages.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height * 2); // overshoot for wrapping

    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages[start..end] {
        let (fg, prefix) = match msg.sender {
            Sender::User => (Color::Green, "> "),
            Sender::Agent => (Color::Yellow, "< "),
        };
        for line in msg.text.lines() {
            lines.push(Line::styled(
                format!("{}{}", prefix, line),
                Style::default().fg(fg),
            ));
        }
    }

    if app.composing && app.scroll_offset == 0 {
        lines.push(Line::styled(
            "< ● ● ●",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
