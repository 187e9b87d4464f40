//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/worker layers. It implements the
//! event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`alphabet`]: The 26-letter quick-filter index and its active flag
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode and dataset lifecycle state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod alphabet;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use alphabet::{AlphabetIndex, LetterEntry};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, LoadPhase, SearchFocus};
pub use state::AppState;
