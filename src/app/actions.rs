//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! system events. Actions bridge pure state transformations and effectful
//! operations like hiding the pane or communicating with the background
//! worker.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
/// They represent the boundary between pure state transformations and
/// effectful operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used to hand the fetched countries payload to the worker for JSON
    /// decoding without blocking the render loop.
    PostToWorker(WorkerMessage),
}
