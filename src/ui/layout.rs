//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and content, reserving the bottom line for
/// the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header (title + subtitle)
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " Get in Touch",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Fill out the form below and we'll get back to you shortly.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the bottom status bar with key hints and the in-flight indicator
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" Tab: next field | {SUBMIT_SHORTCUT}: send | Esc: quit"),
        Style::default().fg(Color::DarkGray),
    )];

    if app.state.loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Sending...",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
