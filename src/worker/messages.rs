//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that decodes the fetched
//! countries payload. Messages travel as JSON over Zellij's plugin IPC.

use crate::domain::Country;
use serde::{Deserialize, Serialize};

/// Messages sent from the main thread to the worker thread.
///
/// The protocol has a single request: decode the raw payload of the one-time
/// countries fetch into typed records, off the render loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a fetched countries payload.
    ParseCountries {
        /// Raw JSON response body as UTF-8 text.
        payload: String,
    },
}

impl WorkerMessage {
    /// Creates a `ParseCountries` message.
    #[must_use]
    pub fn parse_countries(payload: String) -> Self {
        Self::ParseCountries { payload }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The payload decoded successfully.
    CountriesLoaded {
        /// The decoded records, in payload order.
        countries: Vec<Country>,
    },

    /// The payload could not be decoded; no partial dataset is returned.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_round_trips_as_json() {
        let message = WorkerMessage::parse_countries("[]".to_string());
        let encoded = serde_json::to_string(&message).expect("serializable");
        let decoded: WorkerMessage = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(message, decoded);

        let response = WorkerResponse::CountriesLoaded {
            countries: vec![Country::named("Germany")],
        };
        let encoded = serde_json::to_string(&response).expect("serializable");
        let decoded: WorkerResponse = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(response, decoded);
    }
}
