use comfy_table::{Cell, Color};

use crate::catalog::{NONE_SELECTED, options};
use crate::client::Status;
use crate::session::SessionState;

use super::format::{create_styled_table, header_cell, styled_cell};

pub(crate) const TITLE: &str = "🪙 Crypto Explainer GPT";

pub(crate) const INTRO: &str = "Curious about crypto? Pick or type one below and we'll show you \
what it could actually do in the real world, in plain English.";

pub(crate) const FOOTER: &str =
    "Built to help everyday people understand the future — one crypto at a time.";

/// Render the latest result, titled with the name it belongs to.
///
/// The prompt-for-input message is shown untitled.
pub(crate) fn render_result(state: &SessionState, use_color: bool) -> String {
    let mut table = create_styled_table(use_color);
    if !state.name.is_empty() && state.status != Some(Status::Empty) {
        table.set_header(vec![header_cell(&format!("✨ {}", state.name), use_color)]);
    }

    let color = match (use_color, state.status) {
        (true, Some(Status::Error)) => Some(Color::Red),
        (true, Some(Status::Empty)) => Some(Color::Yellow),
        _ => None,
    };
    table.add_row(vec![styled_cell(&state.result, color, false)]);
    table.to_string()
}

/// Numbered dropdown: index 0 is the "(None)" sentinel
pub(crate) fn render_catalog(use_color: bool) -> String {
    let mut table = create_styled_table(use_color);
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Project", use_color),
    ]);
    let dim = if use_color { Some(Color::DarkGrey) } else { None };
    for (index, label) in options().enumerate() {
        let color = if label == NONE_SELECTED { dim } else { None };
        table.add_row(vec![Cell::new(index), styled_cell(label, color, false)]);
    }
    table.to_string()
}
