//! Text input bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let busy = app.conversation.is_busy();
    let border_color = if busy { Color::DarkGray } else { Color::Cyan };

    let block = Block::default()
        .title(" Message (Enter to send) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = if app.draft().is_empty() {
        Paragraph::new(app.conversation.settings().input_placeholder.as_str())
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.draft()).style(Style::default().fg(Color::White))
    };
    frame.render_widget(input, inner);

    if !busy {
        frame.set_cursor_position(Position::new(
            inner.x + app.draft().chars().count() as u16,
            inner.y,
        ));
    }
}
