//! tanya-tui — Terminal chat widget for the portfolio assistant.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use tanya_core::config::EngineConfig;
use tanya_core::engine::ConversationEngine;

use app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to a file (not stdout, since we own the terminal)
    let _guard = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("tanya-tui.log")
                .unwrap_or_else(|_| {
                    // Fallback: /dev/null
                    std::fs::File::open("/dev/null").unwrap()
                })
        })
        .try_init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = EngineConfig::load_from_dir(&project_root).unwrap_or_default();
    let assistant_name = config.assistant_name.clone();

    let engine = ConversationEngine::new(config);
    let handle = engine.handle();
    let mut events = handle.subscribe();
    let seed = handle.transcript().await;

    tokio::spawn(engine.run());
    info!("Starting TUI chat widget for {}", assistant_name);

    let mut app = App::new(assistant_name, handle, seed);

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    loop {
        // Draw
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle engine events (non-blocking)
        loop {
            use tokio::sync::broadcast::error::TryRecvError;
            match events.try_recv() {
                Ok(event) => app.handle_event(event),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }

        // Handle terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    // Quit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // Focus toggle
                    (KeyCode::Tab, _) => {
                        app.input_focused = !app.input_focused;
                    }
                    // Input handling
                    (KeyCode::Enter, _) if app.input_focused => {
                        app.send_message().await;
                    }
                    (KeyCode::Char(c), _) if app.input_focused => {
                        app.input.push(c);
                        app.sync_draft().await;
                    }
                    (KeyCode::Backspace, _) if app.input_focused => {
                        app.input.pop();
                        app.sync_draft().await;
                    }
                    // Scroll
                    (KeyCode::Up, _) if !app.input_focused => app.scroll_up(),
                    (KeyCode::Down, _) if !app.input_focused => app.scroll_down(),
                    (KeyCode::PageUp, _) => app.scroll_up(),
                    (KeyCode::PageDown, _) => app.scroll_down(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    let _ = app.handle.stop().await;

    Ok(())
}
