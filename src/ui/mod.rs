//! UI module for rendering the TUI

mod components;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, content_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    form::draw(frame, content_area, app);
    layout::draw_status_bar(frame, app);
}
