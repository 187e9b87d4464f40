//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! parts of the interface, following a component-based architecture. Each
//! component is responsible for rendering a specific region of the pane.
//!
//! # Components
//!
//! - [`header`]: Title bar carrying the record count
//! - [`search`]: Search input box (border, query text, focus state)
//! - [`alphabet`]: The 26-letter quick-filter strip
//! - [`table`]: Country list with NAME, CAPITAL, REGION, POPULATION columns
//! - [`empty`]: Empty-result indicator
//! - [`status`]: Loading / error line replacing the list
//! - [`detail`]: Detail overlay for a single record
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Alphabet Strip]
//! [Table Headers | Empty | Status]
//! [Table Rows]
//! [Border]
//! [Footer]
//! [Detail Overlay - drawn on top when open]
//! ```

mod alphabet;
mod detail;
mod empty;
mod footer;
mod header;
mod search;
mod status;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use alphabet::render_alphabet_strip;
use detail::render_detail_overlay;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status_line;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full browser layout.
///
/// Header, search bar, and alphabet strip are always visible. The body region
/// carries exactly one of the country table, the empty-result indicator, or
/// the loading/error status line. The detail overlay, when present, is drawn
/// last, on top of the body.
pub fn render_browser(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_alphabet_strip(current_row, &vm.alphabet, theme, cols);

    if let Some(status) = &vm.status {
        render_status_line(status, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        let _current_row = render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail_overlay(detail, theme, cols, rows);
    }
}
