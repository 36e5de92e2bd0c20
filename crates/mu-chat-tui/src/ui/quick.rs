//! Quick questions, offered until the first user turn.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Try asking about (Alt+number) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = app
        .conversation
        .settings()
        .quick_questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(q.as_str(), Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
