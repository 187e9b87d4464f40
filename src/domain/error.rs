//! Error types for the zatlas plugin.
//!
//! This module defines the centralized error type [`ZatlasError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for zatlas plugin operations.
///
/// This enum consolidates the error conditions that can occur during plugin
/// execution, from the one-time dataset fetch to configuration issues. The
/// filter and synchronization paths are total over their inputs and never
/// produce these errors; they arise only at the I/O edges.
#[derive(Debug, Error)]
pub enum ZatlasError {
    /// The one-time countries fetch failed.
    ///
    /// Covers HTTP-level failures (non-2xx status) reported by the Zellij
    /// web-request host call. The string carries the status or transport
    /// description.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The fetched payload could not be decoded into country records.
    ///
    /// Produced by the worker when `serde_json` rejects the payload. No
    /// partial dataset is ever surfaced.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (log file handling).
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when a worker message cannot be serialized or a response cannot
    /// be decoded.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zatlas operations.
///
/// Type alias for `std::result::Result<T, ZatlasError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZatlasError>;
