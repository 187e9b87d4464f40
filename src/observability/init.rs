//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the `tracing` macros
//! used throughout the crate to a rotating log file in the Zellij data
//! directory.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with rotating file output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the configured trace level
/// 2. Formats them as plain (non-ANSI) log lines
/// 3. Writes to a rotating file with backups
///
/// # Parameters
///
/// * `config` - Plugin configuration containing the `trace_level` option
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Log lines are written to: `~/.local/share/zellij/zatlas/zatlas.log`
///
/// The plugin sees the path through Zellij's sandbox mount, which typically
/// maps to the location above when Zellij is started from the user's home
/// directory.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently fails if directory creation fails (observability is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use zatlas::observability::init_tracing;
/// use zatlas::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if let Err(_e) = std::fs::create_dir_all(&data_dir) {
        // Silently fail if we can't create the directory
        return;
    }

    let log_file = data_dir.join("zatlas.log");
    let writer = FileWriter::new(log_file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
