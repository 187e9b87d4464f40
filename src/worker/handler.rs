//! Worker thread implementation for asynchronous payload decoding.
//!
//! This module implements the Zellij worker thread interface. The worker's
//! single job is to decode the fetched countries payload into typed records
//! so the main plugin thread never blocks on JSON parsing of a
//! multi-hundred-kilobyte body.

use crate::domain::error::{Result, ZatlasError};
use crate::domain::Country;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for payload decoding.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread. The worker is stateless between messages.
#[derive(Serialize, Deserialize, Default)]
pub struct ZatlasWorker {}

impl ZatlasWorker {
    /// Decodes a countries payload into records.
    ///
    /// # Errors
    ///
    /// Returns [`ZatlasError::Decode`] when the payload is not a JSON array
    /// of country records.
    fn decode_countries(payload: &str) -> Result<Vec<Country>> {
        serde_json::from_str::<Vec<Country>>(payload)
            .map_err(|e| ZatlasError::Decode(e.to_string()))
    }

    /// Processes a single worker message and produces the response.
    fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message_name(&message));
        let _guard = span.entered();

        match message {
            WorkerMessage::ParseCountries { payload } => {
                match Self::decode_countries(&payload) {
                    Ok(countries) => {
                        tracing::debug!(count = countries.len(), "countries payload decoded");
                        WorkerResponse::CountriesLoaded { countries }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "countries payload rejected");
                        WorkerResponse::Error {
                            message: e.to_string(),
                        }
                    }
                }
            }
        }
    }
}

/// Short message label for tracing, without the payload body.
fn message_name(message: &WorkerMessage) -> &'static str {
    match message {
        WorkerMessage::ParseCountries { .. } => "ParseCountries",
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZatlasWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_record_array() {
        let payload = r#"[{"name":"Germany","capital":"Berlin"},{"name":"Ghana"}]"#;
        let worker = ZatlasWorker::default();
        let response = worker.handle_message(WorkerMessage::parse_countries(payload.to_string()));
        match response {
            WorkerResponse::CountriesLoaded { countries } => {
                assert_eq!(countries.len(), 2);
                assert_eq!(countries[0].name, "Germany");
                assert_eq!(countries[1].capital, None);
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn rejects_malformed_payload_without_partial_data() {
        let worker = ZatlasWorker::default();
        let response = worker.handle_message(WorkerMessage::parse_countries("not json".to_string()));
        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
