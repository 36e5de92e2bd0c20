//! mu-chat-tui — Terminal UI for the university chat assistant.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{info, warn};

use mu_chat_core::config::{ChatProfile, Config};
use mu_chat_core::session::SessionHandle;

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file, not stdout, since we own the terminal
    if let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("mu-chat-tui.log")
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    }

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load_from_dir(&project_root).unwrap_or_else(|e| {
        warn!("Using default config: {:#}", e);
        Config::default()
    });

    let profile = match std::env::args().nth(1) {
        Some(arg) => arg.parse().map_err(anyhow::Error::msg)?,
        None => ChatProfile::Page,
    };
    info!("Starting TUI with the {} chat", profile.as_str());

    let session = SessionHandle::spawn(config.settings(profile).clone());
    let mut app = App::new(&config, session);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    // Cancels a reply that is still pending
    app.session.shutdown().await;
    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.sync();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key).await;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

async fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        // Shift+Enter does not send
        (KeyCode::Enter, m) if !m.contains(KeyModifiers::SHIFT) => {
            app.send_message().await;
        }
        (KeyCode::Char(c), KeyModifiers::ALT) if c.is_ascii_digit() => {
            if let Some(n) = c.to_digit(10) {
                app.pick_quick_question(n as usize).await;
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => app.type_char(c).await,
        (KeyCode::Backspace, _) => app.backspace().await,
        (KeyCode::Up, _) | (KeyCode::PageUp, _) => app.scroll_up(),
        (KeyCode::Down, _) | (KeyCode::PageDown, _) => app.scroll_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mu_chat_core::config::ChatSettings;

    fn app() -> App {
        App::new(&Config::default(), SessionHandle::spawn(ChatSettings::page()))
    }

    async fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key(app, KeyEvent::new(code, modifiers)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_plain_and_shifted_chars_are_typed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'), KeyModifiers::NONE).await;
        press(&mut app, KeyCode::Char('I'), KeyModifiers::SHIFT).await;
        assert_eq!(app.draft(), "hI");
    }

    #[tokio::test(start_paused = true)]
    async fn test_modified_chars_are_not_typed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL).await;
        press(&mut app, KeyCode::Char('x'), KeyModifiers::ALT).await;
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT).await;
        assert_eq!(app.draft(), "");
        assert!(!app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alt_digit_picks_quick_question() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'), KeyModifiers::ALT).await;
        assert_eq!(app.draft(), "How much are the fees?");

        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL).await;
        assert!(app.should_quit);
    }
}
