//! Zatlas: a Zellij plugin for browsing a world-countries directory.
//!
//! Zatlas fetches a country dataset once from a remote API, then lets the
//! user explore it entirely in memory:
//! - Free-text substring search over country names
//! - One-keystroke alphabet filtering (exact first-letter match)
//! - A single active-letter indicator kept consistent with arbitrary input
//! - A read-only detail view for one record, with "No data" fallbacks
//! - Asynchronous payload decoding via a Zellij worker thread
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter logic
//! │  - Letter/search synchronization                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────┐                   ┌───────────────┐
//! │ UI Layer      │                   │ Worker Layer  │
//! │ (ui/)         │                   │ (worker/)     │
//! │ - Rendering   │                   │ - JSON decode │
//! │ - Theming     │                   │ - IPC bridge  │
//! │ - Components  │                   │               │
//! └───────────────┘                   └───────────────┘
//!         │                                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Country model (domain/country)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Country, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background worker for async payload decoding
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: tracing setup with file logging (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zatlas.wasm" {
//!         api_url "https://www.apicountries.com/countries"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Subscribe to Zellij events and request web access
//!
//! 2. **Dataset Fetch**:
//!    - Issue the one-time `web_request` once permissions are granted
//!    - On a 2xx response, forward the body to the worker
//!    - On failure, enter the permanent error state for the session
//!
//! 3. **Worker Processing**:
//!    - Decode the JSON payload into country records off the render loop
//!    - Send `CountriesLoaded` (or a decode error) back to the plugin
//!
//! 4. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, search bar, alphabet strip, table, footer)
//!    - Handle user input (letters, `/`, arrows, Enter, Esc)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use zatlas::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! // Handle events
//! let events = vec![Event::LetterClicked('G'), Event::ShowAll];
//! for event in events {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//!     # let _ = actions;
//! }
//! # Ok::<(), zatlas::ZatlasError>(())
//! ```
//!
//! ## Worker Usage
//!
//! ```rust,no_run
//! use zatlas::worker::{WorkerMessage, ZatlasWorker};
//! use zellij_tile::prelude::*;
//!
//! // In worker thread
//! let mut worker = ZatlasWorker::default();
//! let message = WorkerMessage::parse_countries("[]".to_string());
//! worker.on_message(
//!     "zatlas".to_string(),
//!     serde_json::to_string(&message).unwrap(),
//! );
//! ```
//!
//! # Key Design Decisions
//!
//! ## Two Match Predicates
//!
//! Typing and letter selection filter the same field differently:
//! - Free text runs a case-insensitive substring match over the name
//! - A letter selection runs an exact first-character match
//!
//! A single typed character uses the substring rule even when it coincides
//! with an alphabet letter; the predicates only agree on their results there.
//!
//! ## Derived Active Letter
//!
//! The alphabet strip's active flag is a display indicator derived from the
//! query text (first character only), never an input to the substring
//! filter. At most one letter is active at any time, and a filter that
//! matches nothing clears the flag.
//!
//! ## Worker-Based Decoding
//!
//! The fetched payload is decoded in a separate Zellij worker thread:
//! - Prevents UI blocking while parsing the full dataset
//! - Uses IPC messaging for result communication
//! - The dataset is installed exactly once and read-only afterwards
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadPhase, SearchFocus};
pub use domain::{Country, Result, ZatlasError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default URL of the countries API.
pub const DEFAULT_API_URL: &str = "https://www.apicountries.com/countries";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zatlas.wasm" {
///     api_url "https://www.apicountries.com/countries"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the one-time countries fetch is issued against.
    ///
    /// Default: [`DEFAULT_API_URL`]. The response must be a JSON array of
    /// country records.
    pub api_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level for the tracing subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts typed values with
    /// fallback defaults.
    ///
    /// # Parameters
    ///
    /// * `config` - Configuration map from Zellij
    ///
    /// # Parsing Rules
    ///
    /// - `api_url`: String → `String` (falls back to [`DEFAULT_API_URL`]
    ///   when absent or blank)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zatlas::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.api_url, zatlas::DEFAULT_API_URL);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let api_url = config
            .get("api_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with:
/// - Loaded theme (from file, name, or default)
/// - Empty dataset in the loading phase (populated later by the worker)
/// - Empty query and no active alphabet letter
///
/// # Parameters
///
/// * `config` - Plugin configuration
///
/// # Returns
///
/// An initialized `AppState` ready for event processing.
///
/// # Example
///
/// ```rust
/// use zatlas::{initialize, Config, LoadPhase};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.phase, LoadPhase::Loading);
/// assert_eq!(state.search_query, "");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zatlas plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_for_an_empty_map() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn config_reads_provided_keys() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), " https://example.test/countries ".to_string());
        map.insert("theme".to_string(), "catppuccin-frappe".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, "https://example.test/countries");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_api_url_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "   ".to_string());
        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn initialize_resolves_unknown_theme_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
