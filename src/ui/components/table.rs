//! Table component renderer.
//!
//! This module renders the country list as a four-column table with NAME,
//! CAPITAL, REGION and POPULATION columns. It supports selection highlighting
//! and substring match highlighting within the name column.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 30;

/// Fixed width of the REGION column.
const REGION_COLUMN_WIDTH: usize = 18;

/// Fixed width of the POPULATION column.
const POPULATION_COLUMN_WIDTH: usize = 16;

/// Spacing reserve at the right edge.
const SAFETY_MARGIN: usize = 2;

/// Width of the flexible CAPITAL column for the given pane width.
fn capital_column_width(cols: usize) -> usize {
    cols.saturating_sub(
        NAME_COLUMN_WIDTH + REGION_COLUMN_WIDTH + POPULATION_COLUMN_WIDTH + SAFETY_MARGIN,
    )
}

/// Renders the table column headers at the specified row.
///
/// Displays NAME, CAPITAL, REGION and POPULATION column headers with bold
/// styling and theme colors.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let capital_width = capital_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<NAME_COLUMN_WIDTH$}{:<capital_width$}{:<REGION_COLUMN_WIDTH$}{:<POPULATION_COLUMN_WIDTH$}",
        "NAME", "CAPITAL", "REGION", "POPULATION"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// Displays one country with selection highlighting (full row background) and
/// substring match highlighting within the name. The row is padded to fill
/// the entire pane width so the selection background renders consistently.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Substring match highlights (unless selected)
/// 3. Normal text color
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }
    }

    let name_len = item.name.chars().count().min(NAME_COLUMN_WIDTH);
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len)));

    let capital_width = capital_column_width(cols);
    let capital_len = item.capital.chars().count().min(capital_width);
    print!("{}", item.capital);
    print!("{}", " ".repeat(capital_width.saturating_sub(capital_len)));

    let region_len = item.region.chars().count().min(REGION_COLUMN_WIDTH);
    print!("{}", item.region);
    print!("{}", " ".repeat(REGION_COLUMN_WIDTH.saturating_sub(region_len)));

    print!("{}", item.population);

    let line_len = NAME_COLUMN_WIDTH + capital_width + region_len.max(REGION_COLUMN_WIDTH)
        + item.population.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
