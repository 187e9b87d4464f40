//! Status line component renderer.
//!
//! This module renders the loading indicator shown while the one-time fetch
//! is outstanding, and the persistent error panel shown when it failed.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Row at which the status message is drawn (within the body region).
const MESSAGE_ROW: usize = 11;

/// Renders the loading / error status line centered in the list area.
///
/// Loading uses `loading_fg`; the error state uses `error_fg` and persists
/// for the rest of the session.
pub fn render_status_line(status: &StatusLine, theme: &Theme, cols: usize) {
    let color = if status.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.loading_fg
    };

    position_cursor(MESSAGE_ROW, 1);
    print!("{}", Theme::fg(color));
    print_centered(&status.message, cols);
    print!("{}", Theme::reset());
}
