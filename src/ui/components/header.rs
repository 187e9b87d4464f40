//! Header component renderer.
//!
//! This module renders the title bar with centered text carrying the record
//! count, theme-aware colors, and optional background styling.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and theme
/// colors, padded to fill the entire pane width. The title text carries the
/// current record count, which always equals the length of the filtered
/// list.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print_centered(&header.title, cols);

    print!("{}", Theme::reset());
    row + 1
}
