//! Path utilities for the Zellij sandbox environment.
//!
//! This module locates the plugin's data directory inside the Zellij plugin
//! sandbox, where the host filesystem is mounted under `/host`. The log file
//! lives there.

use std::path::PathBuf;

/// Returns the data directory for zatlas files.
///
/// The directory is located at `/host/.local/share/zellij/zatlas` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available.
///
/// This typically resolves to the user's home directory when Zellij is
/// started from a home directory terminal, making the actual path
/// `~/.local/share/zellij/zatlas`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zatlas")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_inside_the_sandbox_mount() {
        let dir = get_data_dir();
        assert!(dir.starts_with("/host"));
        assert!(dir.ends_with("zatlas"));
    }
}
