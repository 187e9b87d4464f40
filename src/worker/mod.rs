//! Background worker layer for off-thread payload decoding.
//!
//! The worker receives the raw body of the one-time countries fetch from the
//! main plugin thread, decodes it with `serde_json`, and posts the typed
//! records (or a decode error) back. Communication uses Zellij's plugin IPC
//! with JSON-serialized messages.

pub mod handler;
pub mod messages;

/// IPC name shared by the plugin and its worker.
pub const WORKER_NAME: &str = "zatlas";

pub use handler::ZatlasWorker;
pub use messages::{WorkerMessage, WorkerResponse};
