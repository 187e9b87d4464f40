//! Search bar component renderer.
//!
//! This module renders the always-visible search input box with a bordered
//! frame and the current query text. The box border changes color while the
//! bar has typing focus, and the field visibly reflects letter selections
//! (selecting letter G puts "G" in the field).

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the search query text. The box
/// is horizontally centered with margins on both sides; a block cursor is
/// appended to the query while the bar has typing focus.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if search.focused {
        &theme.colors.search_bar_focused_border
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.focused { "█" } else { "" };
    let search_text = format!(" Search: {}{}", search.query, cursor);
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
