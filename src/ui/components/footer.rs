//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Displays keybinding hints centered horizontally with dimmed styling,
/// padded to fill the entire pane width. Text longer than the pane is
/// truncated to prevent layout corruption on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}
