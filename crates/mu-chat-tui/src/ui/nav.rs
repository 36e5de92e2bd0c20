//! Navigation strip — the site's links, external ones marked.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.site.university_name),
        Style::default().fg(Color::Black).bg(Color::Green).bold(),
    )];

    for link in &app.site.nav_links {
        spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        let style = if link.opens_new_context() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let label = if link.opens_new_context() {
            format!("{} ({})", link.name, link.href())
        } else {
            link.name.clone()
        };
        spans.push(Span::styled(label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
