//! Contact form rendering

use crate::app::App;
use crate::state::{Form, FormField, SUBMITTED_BANNER_MSG};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact form with the action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields plus the feedback line
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full Name
            Constraint::Length(3), // Email Address
            Constraint::Length(3), // Phone Number
            Constraint::Length(3), // Company Name
            Constraint::Min(5),    // Message
            Constraint::Length(2), // Feedback (error / success)
        ])
        .margin(1)
        .split(area);

    // Form is focused when not on the buttons row
    let form_focused = !app.state.form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for index in 0..5 {
        if let Some(field) = app.state.form.get_field(index) {
            draw_field(
                frame,
                chunks[index],
                field,
                app.state.form.active_field_index == index,
            );
        }
    }

    draw_feedback(frame, chunks[5], app);
}

/// Draw a single form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Placeholder hint shows only while the field is empty and unfocused
    let display_value = if field.is_empty() && !is_active {
        field.placeholder.clone()
    } else {
        field.value.clone()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error message or the success banner
fn draw_feedback(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.state.error_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    } else if app.state.is_submitted() {
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled("✔ ", Style::default().fg(Color::Green)),
            Span::styled(SUBMITTED_BANNER_MSG, Style::default().fg(Color::Green)),
        ]))
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.form.is_buttons_row_active();
    let selected_button = app.state.form.selected_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Send (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    let send_label = if app.state.loading {
        "Sending..."
    } else {
        "Send Message"
    };

    render_button(
        frame,
        button_chunks[0],
        send_label,
        is_focused && selected_button == 0,
        !app.state.loading,
    );

    render_button(
        frame,
        button_chunks[1],
        "Clear",
        is_focused && selected_button == 1,
        true,
    );
}
