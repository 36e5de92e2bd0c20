//! Scrollable chat feed — user and assistant turns with local times.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mu_chat_core::types::Sender;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let settings = app.conversation.settings();
    let block = Block::default()
        .title(format!(" {} · {} ", settings.assistant_name, settings.status_line))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Scroll offset counts messages back from the newest
    let messages = app.conversation.messages();
    let end = messages.len().saturating_sub(app.scroll_offset);

    let mut lines: Vec<Line> = Vec::new();
    for msg in &messages[..end] {
        let (who, fg) = match msg.sender {
            Sender::User => ("You", Color::Yellow),
            Sender::Bot => (settings.assistant_name.as_str(), Color::Green),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", who), Style::default().fg(fg).bold()),
            Span::styled(msg.display_time(), Style::default().fg(Color::DarkGray)),
        ]));
        for line in msg.text.lines() {
            lines.push(Line::raw(format!("  {}", line)));
        }
        lines.push(Line::raw(""));
    }

    if app.conversation.is_busy() && app.scroll_offset == 0 {
        lines.push(Line::styled(
            "  Assistant is typing...",
            Style::default().fg(Color::DarkGray).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    // Keep the newest wrapped rows in view
    let rows = paragraph.line_count(inner.width);
    let overflow = rows
        .saturating_sub(inner.height as usize)
        .min(u16::MAX as usize) as u16;
    frame.render_widget(paragraph.scroll((overflow, 0)), inner);
}
