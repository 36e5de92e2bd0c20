//! TUI layout compositing — assembles all UI panels.

mod chat;
mod input;
mod nav;
mod quick;
mod status;

use ratatui::prelude::*;

use crate::app::App;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌──────────────────────────────────┐
    // │ Navigation links                 │
    // ├──────────────────────────────────┤
    // │ Chat feed                        │
    // │                                  │
    // ├──────────────────────────────────┤
    // │ Quick questions (first turn only)│
    // ├──────────────────────────────────┤
    // │ Status bar                       │
    // ├──────────────────────────────────┤
    // │ Input                            │
    // └──────────────────────────────────┘

    let quick_height = if app.conversation.show_quick_questions() {
        app.conversation.settings().quick_questions.len() as u16 + 2
    } else {
        0
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // nav
            Constraint::Min(8),               // chat
            Constraint::Length(quick_height), // quick questions
            Constraint::Length(1),            // status
            Constraint::Length(3),            // input
        ])
        .split(area);

    nav::draw(frame, app, main_layout[0]);
    chat::draw(frame, app, main_layout[1]);
    if quick_height > 0 {
        quick::draw(frame, app, main_layout[2]);
    }
    status::draw(frame, app, main_layout[3]);
    input::draw(frame, app, main_layout[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use mu_chat_core::config::{ChatSettings, Config};
    use mu_chat_core::session::SessionHandle;
    use ratatui::backend::TestBackend;

    async fn send(app: &mut App, text: &str) {
        for c in text.chars() {
            app.type_char(c).await;
        }
        app.send_message().await;
        tokio::time::sleep(Duration::from_millis(1600)).await;
        app.sync();
    }

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();
        rows
    }

    async fn four_turns() -> App {
        let mut app = App::new(&Config::default(), SessionHandle::spawn(ChatSettings::page()));
        for q in ["one", "two", "three", "four"] {
            send(&mut app, q).await;
        }
        app
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_shows_newest_reply_after_wrapping() {
        let app = four_turns().await;
        let rows = render(&app);

        let reply_start = rows
            .iter()
            .position(|r| r.contains("question about \"four\""))
            .expect("newest reply not on screen");
        assert!(
            rows[reply_start..].iter().any(|r| r.contains("specifically?")),
            "newest reply tail not visible"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_never_blank_when_scrolled_to_top() {
        let mut app = four_turns().await;
        for _ in 0..20 {
            app.scroll_up();
        }
        let rows = render(&app);

        assert!(rows.iter().any(|r| r.contains("Welcome to the Murang'a")));
        assert!(!rows.iter().any(|r| r.contains("question about \"four\"")));
    }
}
