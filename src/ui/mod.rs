//! UI rendering layer: dispatches the frame to the active view.

mod catalog;
mod detail;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::state::{AppState, View};
use crate::theme::theme;

/// What: Render one frame for the current view.
///
/// Inputs:
/// - `f`: Frame being drawn.
/// - `app`: Mutable state (list selection state is written by the list widget).
///
/// Output: Draws the catalog or detail view over a themed background.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match app.view {
        View::Catalog => catalog::render(f, app, area),
        View::Detail => detail::render(f, app, area),
    }
}
