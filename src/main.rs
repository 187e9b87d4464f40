//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zatlas library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle, and registers the background worker
//! that decodes the fetched countries payload.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for background processing:
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   ZatlasWorker   │   │  ← Background processing
//! │  │ (worker thread)  │   │  ← Payload decoding
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `WebRequestResult` events
//! 3. **Fetch**: Issue the one-time countries request once web access is granted
//! 4. **Decode**: Forward the response body to the worker thread
//! 5. **Update**: Handle events, delegate to library layer
//! 6. **Render**: Call library render function
//!
//! # Worker Communication
//!
//! Messages between plugin and worker use JSON serialization:
//!
//! - Plugin → Worker: [`WorkerMessage`] (`ParseCountries`)
//! - Worker → Plugin: [`WorkerResponse`] (`CountriesLoaded`, error details)
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Ctrl+q`: Close plugin
//!
//! In normal mode:
//! - `a`-`z` / `A`-`Z`: Select alphabet letter (exact first-letter filter)
//! - `Down`/`Up`: Navigate
//! - `Enter`: Open detail view
//! - `/`: Enter search mode
//! - `Esc`: Show all countries
//!
//! In search mode:
//! - Printable keys: Type into the substring filter
//! - `Enter`: Move focus to the results (then open detail view)
//! - `Esc`: Exit search and show all countries
//! - `/`: Return to the search input
//!
//! While the detail view is open, `Esc`, `Enter` and `Backspace` all dismiss
//! it; they are equivalent and dismissing an already-closed view is a no-op.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, web_request};

use zatlas::worker::{WorkerMessage, WorkerResponse, ZatlasWorker, WORKER_NAME};
use zatlas::{handle_event, Action, Config, Event, InputMode, SearchFocus};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(ZatlasWorker, zatlas_worker, ZATLAS_WORKER);

/// Context key marking the one-time countries request.
const FETCH_CONTEXT_KEY: &str = "zatlas_request";

/// Context value for the countries request.
const FETCH_CONTEXT_COUNTRIES: &str = "countries";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: worker
/// communication and the one-time fetch guard.
struct State {
    /// Core application state from library layer.
    app: zatlas::AppState,

    /// URL of the countries API, from plugin configuration.
    api_url: String,

    /// Whether the one-time fetch has been issued.
    ///
    /// Permission results can be delivered more than once; the dataset fetch
    /// must not be.
    fetch_started: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zatlas::initialize(&default_config),
            api_url: default_config.api_url,
            fetch_started: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// tracing, creates application state, requests permissions, and
    /// subscribes to events. The dataset fetch itself waits for the
    /// permission grant.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Issue the one-time countries fetch
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    /// - `WebRequestResult`: Fetch completion
    /// - `PermissionRequestResult`: Grant notification triggering the fetch
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zatlas::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(api_url = %config.api_url, "parsed configuration");
        self.app = zatlas::initialize(&config);
        self.api_url = config.api_url;
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    ///
    /// # Parameters
    ///
    /// * `event` - Zellij event to process
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or resulted in no state changes
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height in rows
    /// * `cols` - Pane width in columns
    fn render(&mut self, rows: usize, cols: usize) {
        zatlas::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Issues the one-time countries fetch.
    ///
    /// Guarded by `fetch_started`; repeated permission grants do not repeat
    /// the request. The request carries a context marker so the result
    /// handler only consumes responses it issued.
    fn start_fetch(&mut self) {
        if self.fetch_started {
            tracing::debug!("fetch already issued, ignoring");
            return;
        }
        self.fetch_started = true;

        tracing::debug!(url = %self.api_url, "issuing countries fetch");
        let mut context = BTreeMap::new();
        context.insert(
            FETCH_CONTEXT_KEY.to_string(),
            FETCH_CONTEXT_COUNTRIES.to_string(),
        );
        web_request(
            &self.api_url,
            HttpVerb::Get,
            BTreeMap::new(),
            vec![],
            context,
        );
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The open detail overlay captures `Esc`, `Enter` and `Backspace` as its
    /// three equivalent dismissal signals and swallows everything else. In
    /// normal mode a plain alphabetic key is the letter selection; in search
    /// mode printable keys edit the query.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Backspace => Some(Event::DismissDetail),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::ShowAll,
            },
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::FocusResults,
                _ => Event::OpenDetail,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => match self.app.input_mode {
                InputMode::Search(_) => Event::Char(c),
                InputMode::Normal if c.is_ascii_alphabetic() => Event::LetterClicked(c),
                InputMode::Normal => return None,
            },
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// A grant triggers the one-time countries fetch; a denial leaves the
    /// plugin on the loading screen with the failure recorded.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - fetching countries");
                self.start_fetch();
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - dataset cannot be loaded");
                self.app
                    .fail_load("web access permission denied".to_string());
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == WORKER_NAME {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!("worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps a web request result to the fetch outcome event.
    ///
    /// Only responses carrying this plugin's context marker are consumed. A
    /// 2xx status hands the body to the worker for decoding; anything else is
    /// the terminal fetch failure.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(FETCH_CONTEXT_KEY).map(String::as_str) != Some(FETCH_CONTEXT_COUNTRIES) {
            tracing::debug!("ignoring web request result with unknown context");
            return None;
        }

        tracing::debug!(status = status, body_len = body.len(), "web request result");

        if (200..300).contains(&status) {
            Some(Event::FetchCompleted {
                payload: String::from_utf8_lossy(body).into_owned(),
            })
        } else {
            let detail = String::from_utf8_lossy(body);
            let detail = detail.trim();
            let error = if detail.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {detail}")
            };
            Some(Event::FetchFailed { error })
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    ///
    /// # Errors
    ///
    /// Logs serialization errors but does not propagate them.
    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!("posting message to worker");
                Self::post_worker_message(message);
            }
        }
    }
}
