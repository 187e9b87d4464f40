//! Alphabet strip component renderer.
//!
//! This module renders the 26-letter quick-filter strip. The single active
//! letter (when any) is drawn with the highlight colors; all other letters
//! are dimmed. At most one letter is ever highlighted.

use crate::ui::helpers::{centered_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AlphabetInfo;

/// Renders the alphabet strip at the specified row.
///
/// Letters are space-separated and horizontally centered. The active entry is
/// rendered with `letter_active_fg`/`letter_active_bg`; inactive entries use
/// the dim text color.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_alphabet_strip(
    row: usize,
    alphabet: &AlphabetInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    // "A B C ... Z": one cell per letter plus separating spaces.
    let strip_width = alphabet.letters.len() * 2 - 1;
    let (left, right) = centered_padding(cols, strip_width);

    position_cursor(row, 1);
    print!("{}", " ".repeat(left));

    for (i, (letter, active)) in alphabet.letters.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        if *active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.letter_active_fg));
            print!("{}", Theme::bg(&theme.colors.letter_active_bg));
            print!("{letter}");
            print!("{}", Theme::reset());
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{letter}");
            print!("{}", Theme::reset());
        }
    }

    print!("{}", " ".repeat(right));
    row + 1
}
