//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! fetch results, and worker responses, translating them into state changes
//! and action sequences. It is the primary control flow coordinator for the
//! application and the home of the three filter entry points: letter click,
//! free-text input, and show-all.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Filtering**: `Char`, `Backspace`, `LetterClicked`, `ShowAll`
//! - **Search focus**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`
//! - **Detail view**: `OpenDetail`, `DismissDetail`
//! - **Dataset lifecycle**: `FetchCompleted`, `FetchFailed`, `WorkerResponse`

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, the one-time fetch, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially (one
/// handler runs to completion before the next is dispatched), ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Selects alphabet letter (the strip-click equivalent).
    ///
    /// Runs the prefix-letter filter and writes the uppercase letter into
    /// the search field.
    LetterClicked(char),
    /// Clears the query and the active letter and shows the full dataset.
    ShowAll,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the result list.
    FocusResults,
    /// Exits search mode, clearing the query (equivalent to show-all).
    ExitSearch,
    /// Appends a character to the search query (substring filter).
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Opens the detail overlay for the selected record.
    OpenDetail,
    /// Dismisses the detail overlay; a no-op when none is open.
    DismissDetail,

    /// The one-time web fetch returned a 2xx response.
    ///
    /// The payload is forwarded to the worker for decoding; the phase stays
    /// `Loading` until the worker responds.
    FetchCompleted {
        /// Raw response body as UTF-8 text.
        payload: String,
    },

    /// The one-time web fetch failed (transport error or non-2xx status).
    ///
    /// Terminal for the session: the error panel persists, no retry.
    FetchFailed {
        /// Human-readable failure description.
        error: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A tuple of (`should_render`, actions). `should_render` is `false` for
/// events that provably changed nothing visible.
///
/// # Errors
///
/// The filter and synchronization paths are total and never error; the
/// `Result` wrapper exists for parity with effectful handlers at the I/O
/// edges.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::LetterClicked(letter) => {
            state.select_letter(*letter);
            Ok((true, vec![]))
        }
        Event::ShowAll => {
            state.show_all();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.refresh_text_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.show_all();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.refresh_text_filter();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.refresh_text_filter();

            Ok((true, vec![]))
        }
        Event::OpenDetail => {
            if state.selected_country().is_none() {
                tracing::debug!("no record selected");
                return Ok((false, vec![]));
            }
            state.open_detail();
            Ok((true, vec![]))
        }
        Event::DismissDetail => {
            let was_open = state.detail.is_some();
            state.dismiss_detail();
            Ok((was_open, vec![]))
        }
        Event::FetchCompleted { payload } => {
            tracing::debug!(payload_len = payload.len(), "fetch completed, decoding off-thread");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::parse_countries(
                    payload.clone(),
                ))],
            ))
        }
        Event::FetchFailed { error } => {
            state.fail_load(error.clone());
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CountriesLoaded { countries } => {
                let installed = state.complete_load(countries.clone());
                Ok((installed, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                state.fail_load(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{InputMode, LoadPhase, SearchFocus};
    use crate::domain::Country;
    use crate::ui::theme::Theme;

    fn ready_state(names: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.complete_load(names.iter().map(|n| Country::named(*n)).collect());
        state
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).expect("handler is total")
    }

    #[test]
    fn full_scenario_from_the_contract() {
        let mut state = ready_state(&["Germany", "Ghana", "France"]);

        // Typing "g" → substring match, two results, G active.
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('g'));
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.alphabet.active_letter(), Some('G'));

        // Clicking F → prefix match, one result, field shows "F".
        send(&mut state, Event::LetterClicked('F'));
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].name, "France");
        assert_eq!(state.alphabet.active_letter(), Some('F'));
        assert_eq!(state.search_query, "F");

        // Typing "xyz" → empty result, letter cleared.
        state.search_query.clear();
        for c in "xyz".chars() {
            send(&mut state, Event::Char(c));
        }
        assert!(state.filtered.is_empty());
        assert_eq!(state.alphabet.active_letter(), None);

        // Show all → everything back, field empty, no letter.
        send(&mut state, Event::ShowAll);
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(state.search_query, "");
        assert_eq!(state.alphabet.active_letter(), None);
    }

    #[test]
    fn characters_are_ignored_outside_search_mode_input() {
        let mut state = ready_state(&["Germany"]);
        let (rendered, actions) = send(&mut state, Event::Char('g'));
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn letter_click_is_available_without_search_mode() {
        let mut state = ready_state(&["Germany", "France"]);
        send(&mut state, Event::LetterClicked('g'));
        assert_eq!(state.search_query, "G");
        assert_eq!(state.filtered.len(), 1);
    }

    #[test]
    fn exit_search_clears_query_and_letter() {
        let mut state = ready_state(&["Germany", "France"]);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('g'));
        send(&mut state, Event::ExitSearch);

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "");
        assert_eq!(state.alphabet.active_letter(), None);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = ready_state(&["Germany"]);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Normal);

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('g'));
        send(&mut state, Event::FocusResults);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn backspace_resyncs_the_active_letter() {
        let mut state = ready_state(&["Germany", "France"]);
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('g'));
        send(&mut state, Event::Char('e'));
        assert_eq!(state.alphabet.active_letter(), Some('G'));

        send(&mut state, Event::Backspace);
        send(&mut state, Event::Backspace);
        assert_eq!(state.search_query, "");
        assert_eq!(state.alphabet.active_letter(), None);
        assert_eq!(state.filtered.len(), 2);
    }

    #[test]
    fn fetch_completion_delegates_decoding_to_worker() {
        let mut state = AppState::new(Theme::default());
        let (rendered, actions) = send(
            &mut state,
            Event::FetchCompleted {
                payload: "[]".to_string(),
            },
        );
        assert!(!rendered);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::PostToWorker(_)));
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn fetch_failure_is_terminal() {
        let mut state = AppState::new(Theme::default());
        send(
            &mut state,
            Event::FetchFailed {
                error: "HTTP 502".to_string(),
            },
        );
        assert_eq!(state.phase, LoadPhase::Failed("HTTP 502".to_string()));

        // A late success no longer installs a dataset.
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CountriesLoaded {
                countries: vec![Country::named("Germany")],
            }),
        );
        assert!(state.countries.is_empty());
    }

    #[test]
    fn worker_loaded_response_installs_dataset_once() {
        let mut state = AppState::new(Theme::default());
        let (rendered, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CountriesLoaded {
                countries: vec![Country::named("Germany")],
            }),
        );
        assert!(rendered);
        assert_eq!(state.phase, LoadPhase::Ready);

        let (rendered, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CountriesLoaded {
                countries: vec![Country::named("France")],
            }),
        );
        assert!(!rendered);
        assert_eq!(state.countries[0].name, "Germany");
    }

    #[test]
    fn detail_dismiss_is_idempotent_via_events() {
        let mut state = ready_state(&["Germany"]);
        send(&mut state, Event::OpenDetail);
        assert!(state.detail.is_some());

        let (rendered, _) = send(&mut state, Event::DismissDetail);
        assert!(rendered);
        let (rendered, _) = send(&mut state, Event::DismissDetail);
        assert!(!rendered);
    }
}
