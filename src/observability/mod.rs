//! Tracing-based observability with rotating file logging.
//!
//! This module wires the `tracing` spans and events emitted throughout the
//! plugin to a log file, for offline debugging of a WASM plugin that has no
//! stderr of its own.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (non-ANSI) → rotating log file
//! ```
//!
//! # Features
//!
//! - **File-Based Logging**: Lines written to `~/.local/share/zellij/zatlas/zatlas.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Shared by Both Threads**: The worker thread initializes the same
//!   pipeline, so plugin and worker logs interleave in one file
//!
//! # Configuration
//!
//! The log level is controlled via the `trace_level` config option in the
//! plugin configuration (default: `"info"`).
//!
//! # Usage
//!
//! Initialize tracing early in plugin lifecycle:
//!
//! ```rust
//! use zatlas::observability::init_tracing;
//! use zatlas::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
