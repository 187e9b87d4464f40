//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the filter/selection synchronization rules and UI view
//! model generation. It is the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` separates the immutable dataset (the country list, assigned
//! exactly once when the load completes) from derived state (the filtered
//! list, the active alphabet letter, the selection cursor). View models are
//! computed on demand from state snapshots.
//!
//! # Query State
//!
//! Two values fully determine the current filtered view:
//!
//! - `search_query`: the literal text in the search field
//! - the alphabet index's single active flag, which is a derived display
//!   indicator kept consistent with the query — it never participates in the
//!   substring computation itself
//!
//! The three entry points that mutate query state are
//! [`select_letter`](AppState::select_letter) (prefix-letter filter),
//! [`refresh_text_filter`](AppState::refresh_text_filter) (substring filter
//! after the query text changed), and [`show_all`](AppState::show_all).

use super::modes::{InputMode, LoadPhase, SearchFocus};
use crate::app::alphabet::AlphabetIndex;
use crate::domain::Country;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlphabetInfo, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    StatusLine, UIViewModel,
};

/// Central application state container.
///
/// Holds the dataset, the query state, selection, and mode information.
/// Mutated by the event handler in response to user input and system events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full country dataset.
    ///
    /// Empty until the one-time load completes, then read-only for the rest
    /// of the session. Order is the payload order and is never changed.
    pub countries: Vec<Country>,

    /// Countries matching the current query state, in dataset order.
    ///
    /// Recomputed by the filter methods after every query mutation. Used for
    /// rendering, the displayed count, and selection bounds checking.
    pub filtered: Vec<Country>,

    /// Zero-based index of the selected row within `filtered`.
    ///
    /// Clamped to valid bounds whenever the filter changes. Wraps around
    /// during navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// The literal text currently in the search field.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, set wholesale by
    /// a letter selection, cleared by show-all.
    pub search_query: String,

    /// The 26-letter quick-filter strip with its single active flag.
    pub alphabet: AlphabetIndex,

    /// Dataset lifecycle phase (loading, ready, failed).
    pub phase: LoadPhase,

    /// The record currently shown in the detail overlay, if any.
    pub detail: Option<Country>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial application state: empty dataset, empty query, no
    /// active letter, loading phase.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            countries: vec![],
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            alphabet: AlphabetIndex::new(),
            phase: LoadPhase::Loading,
            detail: None,
            theme,
        }
    }

    /// Installs the loaded dataset and renders the initial unfiltered view.
    ///
    /// Honored only while the phase is still `Loading`, keeping the store
    /// write-once; a duplicate completion is ignored and reported via the
    /// return value.
    pub fn complete_load(&mut self, countries: Vec<Country>) -> bool {
        if self.phase != LoadPhase::Loading {
            tracing::debug!("duplicate load completion ignored");
            return false;
        }
        tracing::debug!(count = countries.len(), "dataset loaded");
        self.countries = countries;
        self.phase = LoadPhase::Ready;
        self.apply_substring_filter();
        true
    }

    /// Marks the load as permanently failed for this session.
    ///
    /// No partial dataset is ever installed; the renderer shows the message
    /// until the plugin is closed.
    pub fn fail_load(&mut self, message: String) {
        if self.phase != LoadPhase::Loading {
            tracing::debug!("load failure after completion ignored");
            return;
        }
        tracing::debug!(error = %message, "dataset load failed");
        self.phase = LoadPhase::Failed(message);
    }

    /// Moves the selection cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the selection cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected country, if any row is visible.
    #[must_use]
    pub fn selected_country(&self) -> Option<&Country> {
        self.filtered.get(self.selected_index)
    }

    /// Letter-click entry point: selects alphabet letter `letter`.
    ///
    /// Activates the letter (deactivating any other), writes the uppercase
    /// letter into the search field so the selection is visible there, then
    /// runs the prefix-letter filter. A zero-result outcome clears the
    /// active letter again.
    pub fn select_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        tracing::debug!(letter = %letter, "letter selected");
        self.alphabet.activate(letter);
        self.search_query = letter.to_string();
        self.apply_letter_filter(letter);
    }

    /// Text-input entry point: re-synchronizes after `search_query` changed.
    ///
    /// Recomputes the active letter from the query text alone (first
    /// character heuristic), then runs the substring filter. Called after
    /// every character append or backspace.
    pub fn refresh_text_filter(&mut self) {
        self.alphabet.sync_from_query(&self.search_query);
        self.apply_substring_filter();
    }

    /// Show-all entry point: clears the query and the active letter and
    /// restores the full unfiltered dataset.
    ///
    /// Invoking this twice in a row yields the same state as invoking it
    /// once.
    pub fn show_all(&mut self) {
        tracing::debug!("showing all countries");
        self.search_query.clear();
        self.alphabet.clear();
        self.apply_substring_filter();
    }

    /// Runs the substring filter for the current query over the dataset.
    ///
    /// A record matches iff its name contains the query case-insensitively;
    /// the empty query matches everything. Dataset order is preserved. An
    /// empty result force-clears the active letter.
    pub fn apply_substring_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_substring_filter",
            total = self.countries.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let query = self.search_query.as_str();
        self.filtered = self
            .countries
            .iter()
            .filter(|country| country.matches_substring(query))
            .cloned()
            .collect();
        self.finish_filter();
    }

    /// Runs the prefix-letter filter for `letter` over the dataset.
    ///
    /// A record matches iff the first character of its name, uppercased,
    /// equals the letter exactly. Dataset order is preserved. An empty
    /// result force-clears the active letter.
    pub fn apply_letter_filter(&mut self, letter: char) {
        let _span = tracing::debug_span!(
            "apply_letter_filter",
            total = self.countries.len(),
            letter = %letter
        )
        .entered();

        self.filtered = self
            .countries
            .iter()
            .filter(|country| country.starts_with_letter(letter))
            .cloned()
            .collect();
        self.finish_filter();
    }

    /// Common tail of both filters: clamp the cursor and enforce the
    /// zero-result rule (count 0 shows no active letter).
    fn finish_filter(&mut self) {
        if self.filtered.is_empty() {
            self.selected_index = 0;
            self.alphabet.clear();
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
        tracing::debug!(filtered_count = self.filtered.len(), "filter applied");
    }

    /// Opens the detail overlay for the currently selected record.
    ///
    /// No-op when no row is selected.
    pub fn open_detail(&mut self) {
        if let Some(country) = self.selected_country() {
            tracing::debug!(name = %country.name, "opening detail view");
            self.detail = Some(country.clone());
        }
    }

    /// Dismisses the detail overlay. Dismissing an already-closed overlay is
    /// a no-op.
    pub fn dismiss_detail(&mut self) {
        if self.detail.take().is_some() {
            tracing::debug!("detail view dismissed");
        }
    }

    /// Computes a renderable UI view model from current state and pane
    /// dimensions.
    ///
    /// While the load is outstanding or failed, the view model carries a
    /// status line instead of rows. Otherwise it windows the filtered list
    /// around the selection cursor, attaches substring highlight ranges, and
    /// carries the alphabet strip, search bar, header count, and (when open)
    /// the detail projection.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let status = match &self.phase {
            LoadPhase::Loading => Some(StatusLine {
                message: "Loading countries...".to_string(),
                is_error: false,
            }),
            LoadPhase::Failed(message) => Some(StatusLine {
                message: format!("Error loading countries data: {message}"),
                is_error: true,
            }),
            LoadPhase::Ready => None,
        };

        let empty_state = if status.is_none() && self.filtered.is_empty() {
            Some(EmptyState {
                message: "No countries found".to_string(),
                subtitle: "Esc shows all countries".to_string(),
            })
        } else {
            None
        };

        let display_items = if status.is_some() || empty_state.is_some() {
            vec![]
        } else {
            self.compute_display_window(rows, cols)
        };

        let visible_start = self.visible_start(rows);
        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        UIViewModel {
            display_items,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            alphabet: self.compute_alphabet(),
            search_bar: self.compute_search_bar(),
            empty_state,
            status,
            detail: self.detail.as_ref().map(Self::compute_detail),
        }
    }

    /// First visible row index of the list window for the given pane height.
    fn visible_start(&self, rows: usize) -> usize {
        let available = Self::calculate_available_rows(rows);
        let mut start = self.selected_index.saturating_sub(available / 2);
        let end = (start + available).min(self.filtered.len());
        if end - start < available && self.filtered.len() >= available {
            start = end.saturating_sub(available);
        }
        start
    }

    /// Computes the display items for the visible window of the filtered
    /// list.
    fn compute_display_window(&self, rows: usize, cols: usize) -> Vec<DisplayItem> {
        let available = Self::calculate_available_rows(rows);
        let start = self.visible_start(rows);
        let end = (start + available).min(self.filtered.len());

        self.filtered[start..end]
            .iter()
            .enumerate()
            .map(|(relative_idx, country)| {
                self.compute_display_item(country, start + relative_idx, cols)
            })
            .collect()
    }

    /// Computes one table row: formatted columns, selection flag, and the
    /// highlight ranges for the current query within the name.
    fn compute_display_item(
        &self,
        country: &Country,
        absolute_idx: usize,
        cols: usize,
    ) -> DisplayItem {
        const NAME_COLUMN_WIDTH: usize = 30;
        const REGION_COLUMN_WIDTH: usize = 18;
        const POPULATION_COLUMN_WIDTH: usize = 16;
        const SAFETY_MARGIN: usize = 2;

        let is_selected = absolute_idx == self.selected_index;
        let max_capital_width = cols.saturating_sub(
            NAME_COLUMN_WIDTH + REGION_COLUMN_WIDTH + POPULATION_COLUMN_WIDTH + SAFETY_MARGIN,
        );

        let name = truncate_cell(&country.name, NAME_COLUMN_WIDTH - 2);
        let highlight_ranges = substring_ranges(&name, &self.search_query);

        DisplayItem {
            name,
            capital: truncate_cell(&country.capital_display(), max_capital_width),
            region: truncate_cell(&country.region_display(), REGION_COLUMN_WIDTH - 2),
            population: country.population_display(),
            is_selected,
            highlight_ranges,
        }
    }

    /// Header carries the displayed record count, which always equals the
    /// length of the filtered list.
    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" All countries: {} ", self.filtered.len()),
        }
    }

    /// Context-appropriate keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "ESC / Enter / Backspace: close details".to_string()
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: show all  Enter: results  Type to filter".to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: show all  /: edit query  Up/Down: navigate  Enter: details".to_string()
                }
                InputMode::Normal => {
                    "a-z: letter filter  /: search  Up/Down: navigate  Enter: details  ESC: show all  Ctrl+q: quit"
                        .to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }

    /// The search bar is always visible; focus follows the typing mode.
    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search_query.clone(),
            focused: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
        }
    }

    /// Snapshot of the 26 letters with their active flags.
    fn compute_alphabet(&self) -> AlphabetInfo {
        AlphabetInfo {
            letters: self
                .alphabet
                .entries()
                .iter()
                .map(|entry| (entry.letter, entry.active))
                .collect(),
        }
    }

    /// Fully resolved detail projection for one record, every optional field
    /// already passed through the "No data" fallback.
    fn compute_detail(country: &Country) -> DetailInfo {
        DetailInfo {
            name: country.name.clone(),
            flag: country.flag_display(),
            capital: country.capital_display(),
            region: country.region_display(),
            subregion: country.subregion_display(),
            population: country.population_display(),
            area: country.area_display(),
            languages: country.languages_display(),
            currencies: country.currencies_display(),
            timezones: country.timezones_display(),
        }
    }

    /// Rows available for the country list after subtracting UI chrome:
    /// blank line, header, border, search box (3), alphabet strip, table
    /// header, bottom border, footer.
    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(10)
    }
}

/// Truncates a cell value to `max_width` characters, marking the cut with
/// `...`.
fn truncate_cell(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        text.to_string()
    } else if max_width <= 3 {
        text.chars().take(max_width).collect()
    } else {
        let kept: String = text.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}

/// Character-index ranges of case-insensitive, non-overlapping occurrences of
/// `query` within `name`, used for match highlighting.
///
/// Returns no ranges for the empty query. Comparison is per-character
/// lowercase, which matches the substring filter for the ASCII-dominant
/// country names.
fn substring_ranges(name: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let lower = |c: char| c.to_lowercase().next().unwrap_or(c);
    let name_chars: Vec<char> = name.chars().map(lower).collect();
    let query_chars: Vec<char> = query.chars().map(lower).collect();

    if query_chars.len() > name_chars.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + query_chars.len() <= name_chars.len() {
        if name_chars[i..i + query_chars.len()] == query_chars[..] {
            ranges.push((i, i + query_chars.len()));
            i += query_chars.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state(names: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.complete_load(names.iter().map(|n| Country::named(*n)).collect());
        state
    }

    fn filtered_names(state: &AppState) -> Vec<String> {
        state.filtered.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn dataset_installs_exactly_once() {
        let mut state = AppState::new(Theme::default());
        assert!(state.complete_load(vec![Country::named("Germany")]));
        assert!(!state.complete_load(vec![Country::named("France")]));
        assert_eq!(filtered_names(&state), vec!["Germany"]);
    }

    #[test]
    fn failure_after_completion_is_ignored() {
        let mut state = ready_state(&["Germany"]);
        state.fail_load("late error".to_string());
        assert_eq!(state.phase, LoadPhase::Ready);
    }

    #[test]
    fn typing_g_runs_substring_match_and_activates_g() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        state.search_query.push('g');
        state.refresh_text_filter();

        assert_eq!(filtered_names(&state), vec!["Germany", "Ghana"]);
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.alphabet.active_letter(), Some('G'));
    }

    #[test]
    fn clicking_f_runs_prefix_match_and_fills_search_field() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        state.select_letter('F');

        assert_eq!(filtered_names(&state), vec!["France"]);
        assert_eq!(state.alphabet.active_letter(), Some('F'));
        assert_eq!(state.search_query, "F");
    }

    #[test]
    fn zero_result_clears_active_letter() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        state.search_query = "xyz".to_string();
        state.refresh_text_filter();

        assert!(state.filtered.is_empty());
        assert_eq!(state.alphabet.active_letter(), None);
    }

    #[test]
    fn show_all_restores_everything_and_is_idempotent() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        state.select_letter('F');

        state.show_all();
        let after_once = (
            filtered_names(&state),
            state.search_query.clone(),
            state.alphabet.active_letter(),
        );
        state.show_all();
        let after_twice = (
            filtered_names(&state),
            state.search_query.clone(),
            state.alphabet.active_letter(),
        );

        assert_eq!(after_once.0, vec!["Germany", "Ghana", "France"]);
        assert_eq!(after_once.1, "");
        assert_eq!(after_once.2, None);
        assert_eq!(after_once, after_twice);
    }

    #[test]
    fn click_and_single_char_type_agree_on_active_letter() {
        let mut clicked = ready_state(&["Germany", "Ghana", "France"]);
        clicked.select_letter('G');

        let mut typed = ready_state(&["Germany", "Ghana", "France"]);
        typed.search_query.push('G');
        typed.refresh_text_filter();

        assert_eq!(
            clicked.alphabet.active_letter(),
            typed.alphabet.active_letter()
        );
        // Different predicates, same single-character outcome here.
        assert_eq!(filtered_names(&clicked), vec!["Germany", "Ghana"]);
        assert_eq!(filtered_names(&typed), vec!["Germany", "Ghana"]);
    }

    #[test]
    fn prefix_and_substring_predicates_differ_for_longer_input() {
        let mut state = ready_state(&["Afghanistan", "France"]);
        // Substring "f" matches both names; prefix F matches France alone.
        state.search_query = "f".to_string();
        state.refresh_text_filter();
        assert_eq!(filtered_names(&state), vec!["Afghanistan", "France"]);

        state.select_letter('F');
        assert_eq!(filtered_names(&state), vec!["France"]);
    }

    #[test]
    fn filter_preserves_dataset_order() {
        let mut state = ready_state(&["Zimbabwe", "Zambia", "Austria"]);
        state.search_query = "z".to_string();
        state.refresh_text_filter();
        assert_eq!(filtered_names(&state), vec!["Zimbabwe", "Zambia"]);
    }

    #[test]
    fn first_character_heuristic_keeps_letter_active() {
        let mut state = ready_state(&["Germany", "Ghana", "Albania"]);
        state.search_query = "Gx".to_string();
        state.refresh_text_filter();
        // No results, so the zero-result rule wins over the heuristic.
        assert_eq!(state.alphabet.active_letter(), None);

        state.search_query = "an".to_string();
        state.refresh_text_filter();
        // All three names contain "an"; the active letter comes from the
        // first typed character alone, not from the result set.
        assert_eq!(filtered_names(&state), vec!["Germany", "Ghana", "Albania"]);
        assert_eq!(state.alphabet.active_letter(), Some('A'));
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 2;
        state.search_query = "g".to_string();
        state.refresh_text_filter();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn filtering_before_load_is_inert() {
        let mut state = AppState::new(Theme::default());
        state.search_query = "g".to_string();
        state.refresh_text_filter();
        assert!(state.filtered.is_empty());
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn viewmodel_reports_count_and_empty_state() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " All countries: 3 ");
        assert!(vm.empty_state.is_none());

        state.search_query = "xyz".to_string();
        state.refresh_text_filter();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " All countries: 0 ");
        assert!(vm.empty_state.is_some());
        assert!(vm.display_items.is_empty());
        assert!(vm.alphabet.letters.iter().all(|(_, active)| !active));
    }

    #[test]
    fn viewmodel_shows_status_while_loading_and_after_failure() {
        let mut state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.status.as_ref().is_some_and(|s| !s.is_error));

        state.fail_load("HTTP 502".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.status.as_ref().is_some_and(|s| s.is_error));
        assert!(vm
            .status
            .as_ref()
            .is_some_and(|s| s.message.contains("HTTP 502")));
    }

    #[test]
    fn viewmodel_windows_long_lists() {
        let names: Vec<String> = (0..100).map(|i| format!("Country{i:03}")).collect();
        let mut state = AppState::new(Theme::default());
        state.complete_load(names.iter().map(|n| Country::named(n.as_str())).collect());
        state.selected_index = 50;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 14);
        assert!(vm.display_items[vm.selected_index].is_selected);
    }

    #[test]
    fn detail_open_and_dismiss_are_idempotent() {
        let mut state = ready_state(&["Germany"]);
        state.open_detail();
        assert!(state.detail.is_some());

        state.dismiss_detail();
        assert!(state.detail.is_none());
        state.dismiss_detail();
        assert!(state.detail.is_none());
    }

    #[test]
    fn detail_projection_resolves_missing_fields() {
        let mut state = ready_state(&["Germany"]);
        state.open_detail();
        let vm = state.compute_viewmodel(24, 80);
        let detail = vm.detail.expect("detail open");
        assert_eq!(detail.name, "Germany");
        assert_eq!(detail.capital, crate::domain::NO_DATA);
        assert_eq!(detail.timezones, crate::domain::NO_DATA);
    }

    #[test]
    fn substring_ranges_find_all_occurrences() {
        assert_eq!(substring_ranges("Tanzania", "an"), vec![(1, 3), (4, 6)]);
        assert_eq!(substring_ranges("Germany", "GER"), vec![(0, 3)]);
        assert!(substring_ranges("Germany", "").is_empty());
        assert!(substring_ranges("Chad", "xyz").is_empty());
    }
}
