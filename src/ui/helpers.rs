//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, centered-line layout, and highlighted-text
//! output for substring matches.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Left and right padding widths that center a span of `text_len` characters
/// within a `cols`-wide line.
///
/// The right padding absorbs the remainder when the free space is odd, and
/// both collapse to zero when the text overflows the line.
#[must_use]
pub fn centered_padding(cols: usize, text_len: usize) -> (usize, usize) {
    let left = cols.saturating_sub(text_len) / 2;
    let right = cols.saturating_sub(left + text_len);
    (left, right)
}

/// Prints `text` centered in a `cols`-wide line, padding both sides with
/// spaces so any active background styling covers the full line.
///
/// Text longer than the line is truncated to prevent layout corruption on
/// narrow panes.
pub fn print_centered(text: &str, cols: usize) {
    let shown: String = text.chars().take(cols).collect();
    let (left, right) = centered_padding(cols, shown.chars().count());
    print!("{}{shown}{}", " ".repeat(left), " ".repeat(right));
}

/// Renders text with highlighted character ranges for substring matches.
///
/// Walks the text once, switching between the normal and the match highlight
/// styles at each range boundary. Suppressed entirely for selected rows,
/// where the selection colors take precedence.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)`,
///   exclusive end, non-overlapping and in ascending order
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is currently selected (disables match
///   highlighting)
///
/// # Character Indices
///
/// Ranges use character indices (not byte indices), matching how the view
/// model computes them.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let mut ranges = ranges.iter().copied().peekable();
    for (i, c) in text.chars().enumerate() {
        match ranges.peek().copied() {
            Some((start, end)) if i >= start && i < end => {
                if i == start {
                    print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
                    print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
                }
                print!("{c}");
                if i + 1 == end {
                    print!("{}", Theme::reset());
                    print!("{}", Theme::fg(&theme.colors.text_normal));
                    ranges.next();
                }
            }
            _ => print!("{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_padding_splits_free_space() {
        assert_eq!(centered_padding(10, 4), (3, 3));
        assert_eq!(centered_padding(11, 4), (3, 4));
        assert_eq!(centered_padding(4, 4), (0, 0));
        assert_eq!(centered_padding(2, 4), (0, 0));
    }
}
