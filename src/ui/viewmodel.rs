//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: formatted columns, the record
//! count, substring highlight ranges, and fully resolved optional fields for
//! the detail overlay.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. Exactly
/// one of the list body, the empty indicator, or the status line is populated
/// at a time; the detail overlay, when present, is drawn on top.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the visible window of the filtered list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Header information (title with the displayed record count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// The 26-letter strip with active flags.
    pub alphabet: AlphabetInfo,

    /// Search bar state; the bar is always visible.
    pub search_bar: SearchBarInfo,

    /// Explicit empty-result indicator (when the filter matched nothing).
    pub empty_state: Option<EmptyState>,

    /// Loading or error line replacing the list while the dataset is not
    /// ready.
    pub status: Option<StatusLine>,

    /// Detail projection of one record, when the overlay is open.
    pub detail: Option<DetailInfo>,
}

/// Display information for a single country row.
///
/// Columns are pre-formatted; optional source fields already carry the
/// "No data" fallback.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Country name, truncated to the name column.
    pub name: String,

    /// Capital column value.
    pub capital: String,

    /// Region column value.
    pub region: String,

    /// Population column value with thousands separators.
    pub population: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of the current query within `name`.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices,
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, carrying the displayed record count.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Alphabet strip display information.
#[derive(Debug, Clone)]
pub struct AlphabetInfo {
    /// The 26 letters in order with their active flags. At most one flag is
    /// set.
    pub letters: Vec<(char, bool)>,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether the bar currently has typing focus.
    pub focused: bool,
}

/// Empty-result indicator display information.
///
/// Shown when the current filter matched no records; the header count reads
/// zero and no alphabet letter is active in this state.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No countries found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Loading / error status line display information.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Message to display centered in the list area.
    pub message: String,

    /// Whether this is the terminal error state (colored accordingly).
    pub is_error: bool,
}

/// Fully resolved detail projection of one record.
///
/// Every field is already a display string; absent source fields carry the
/// "No data" fallback.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub name: String,
    pub flag: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: String,
    pub area: String,
    pub languages: String,
    pub currencies: String,
    pub timezones: String,
}
