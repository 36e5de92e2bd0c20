//! Status bar — busy flag and turn count.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use mu_chat_core::types::ConversationStatus;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.conversation.status();
    let color = match status {
        ConversationStatus::Idle => Color::DarkGray,
        ConversationStatus::AwaitingReply => Color::Green,
    };

    let spans = vec![
        Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::raw(format!(" messages: {} ", app.conversation.messages().len())),
        Span::styled(" Ctrl+C to quit ", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
