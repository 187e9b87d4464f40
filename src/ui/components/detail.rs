//! Detail overlay component renderer.
//!
//! This module renders the read-only detail projection of a single country
//! record as a bordered box drawn on top of the list. Every optional source
//! field arrives already resolved through the "No data" fallback; the overlay
//! itself contains no filtering logic.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Preferred overlay width, bounded by the pane.
const PREFERRED_WIDTH: usize = 62;

/// Renders the detail overlay centered in the pane.
///
/// Layout:
///
/// ```text
/// ┌──────────────────────────┐
/// │         Germany          │
/// │ Flag: https://...        │
/// │                          │
/// │ Capital:    Berlin       │
/// │ Region:     Europe       │
/// │ ...                      │
/// └──────────────────────────┘
/// ```
///
/// Field lines are truncated to the box interior; the box is drawn last so it
/// overwrites the list beneath it.
pub fn render_detail_overlay(detail: &DetailInfo, theme: &Theme, cols: usize, rows: usize) {
    let box_width = PREFERRED_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner_width = box_width - 2;
    let left = (cols.saturating_sub(box_width)) / 2 + 1;

    let fields = [
        ("Capital:", &detail.capital),
        ("Region:", &detail.region),
        ("Subregion:", &detail.subregion),
        ("Population:", &detail.population),
        ("Area:", &detail.area),
        ("Languages:", &detail.languages),
        ("Currencies:", &detail.currencies),
        ("Timezones:", &detail.timezones),
    ];

    // Borders + title + flag + separator + fields.
    let box_height = 5 + fields.len();
    let top = (rows.saturating_sub(box_height)) / 2 + 1;

    let border = Theme::fg(&theme.colors.detail_border);

    position_cursor(top, left);
    print!("{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let title_len = detail.name.chars().count().min(inner_width);
    let title: String = detail.name.chars().take(inner_width).collect();
    let title_padding = (inner_width - title_len) / 2;
    position_cursor(top + 1, left);
    print!("{border}│{}", Theme::reset());
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(title_padding));
    print!("{title}");
    print!(
        "{}",
        " ".repeat(inner_width - title_padding - title_len)
    );
    print!("{}", Theme::reset());
    print!("{border}│{}", Theme::reset());

    render_content_line(
        top + 2,
        left,
        inner_width,
        &format!(" Flag: {}", detail.flag),
        theme,
    );
    render_content_line(top + 3, left, inner_width, "", theme);

    for (i, (label, value)) in fields.iter().enumerate() {
        let line = format!(" {label:<12}{value}");
        render_content_line(top + 4 + i, left, inner_width, &line, theme);
    }

    position_cursor(top + 4 + fields.len(), left);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}

/// Renders one interior line of the overlay, truncated and padded to the box
/// width.
fn render_content_line(row: usize, left: usize, inner_width: usize, text: &str, theme: &Theme) {
    let border = Theme::fg(&theme.colors.detail_border);
    let shown: String = text.chars().take(inner_width).collect();
    let shown_len = shown.chars().count();

    position_cursor(row, left);
    print!("{border}│{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(inner_width - shown_len));
    print!("{}", Theme::reset());
    print!("{border}│{}", Theme::reset());
}
