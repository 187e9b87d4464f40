//! Empty-result component renderer.
//!
//! This module renders the explicit indicator shown when the current filter
//! matched no records. It accompanies a zero count in the header; the
//! alphabet strip shows no active letter in this state.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row at which the empty-result message is drawn (within the body region).
const MESSAGE_ROW: usize = 11;

/// Renders the empty-result indicator.
///
/// Displays a centered two-line message in the list area:
///
/// ```text
/// No countries found
/// Esc shows all countries
/// ```
///
/// The message uses the `empty_state_fg` theme color, the subtitle uses the
/// dim text color.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(MESSAGE_ROW, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    position_cursor(MESSAGE_ROW + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());
}
