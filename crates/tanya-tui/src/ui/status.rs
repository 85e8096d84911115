//! Status bar — assistant state and message count.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let (state_str, state_color) = if app.composing {
        ("typing...", Color::Green)
    } else {
        ("online", Color::DarkGray)
    };

    let spans = vec![
        Span::styled(
            format!(" {} ", state_str),
            Style::default().fg(Color::Black).bg(state_color),
        ),
        Span::raw(format!(" messages: {} ", app.messages.len())),
    ];

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
