//! Line-oriented rendering of the users list.
//!
//! Pure functions from a [`ListViewModel`] to printable lines, so the
//! terminal output can be tested without a terminal.

use rolodex_core::ListViewModel;

/// Spinner placeholder shown while a fetch is in flight.
const LOADER_LINE: &str = "Loading users...";

/// Placeholder shown when a finished load produced no records.
const EMPTY_LINE: &str = "No users.";

/// Render one frame of the list as printable lines.
///
/// `height` caps the number of record rows; anything beyond it collapses
/// into a trailing `... N more` marker. An idle view and an empty load
/// render the same, so callers that care about the difference should skip
/// drawing until the first fetch starts.
pub fn frame(view: &ListViewModel, height: usize) -> Vec<String> {
    if view.loader_visible {
        return vec![LOADER_LINE.to_string()];
    }
    if let Some(banner) = view.error_banner() {
        return vec![banner.to_string()];
    }
    if view.records().is_empty() {
        return vec![EMPTY_LINE.to_string()];
    }

    let mut lines: Vec<String> = view
        .viewport(height)
        .iter()
        .map(|row| format!("{:<24} {}", row.title, row.subtitle))
        .collect();

    let total = view.records().len();
    if total > height {
        lines.push(format!("... {} more", total - height));
    }
    lines
}
