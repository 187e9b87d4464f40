//! Input and lifecycle mode types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! and the dataset lifecycle. Input modes determine which keybindings are
//! active and how keypresses are interpreted; the load phase determines
//! whether the list, a loading indicator, or the error panel is shown.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: letter selection, navigation, and command mode
//! - **Search**: active free-text filtering with typing or result navigation
//!   focus
//!
//! Independently, the dataset moves through exactly one phase transition:
//! `Loading` → `Ready` on a successful load, or `Loading` → `Failed` on a
//! fetch or decode failure. A failed load is permanent for the session.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// results. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts arrow movement, enter to open the detail view, and `/` to
    /// return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Letter-selection and command mode.
    ///
    /// Plain alphabetic keys select an alphabet letter (prefix filter),
    /// arrows navigate, `/` enters search, Esc shows all countries, Enter
    /// opens the detail view.
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results. Typed characters drive the substring
    /// filter.
    Search(SearchFocus),
}

/// Dataset lifecycle phase.
///
/// The dataset is fetched exactly once per session. While the fetch is
/// outstanding the filter entry points operate over an empty dataset
/// (harmlessly yielding empty results) and the renderer shows the loading
/// indicator. A failure is terminal: no retry is attempted and the error
/// panel persists for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The one-time fetch (or its decode) is still outstanding.
    Loading,

    /// The dataset is loaded and read-only; filtering is live.
    Ready,

    /// The fetch or decode failed; the message is shown verbatim.
    Failed(String),
}
