use anyhow::Result;
use std::path::PathBuf;

/// All OS / environment specific behavior belongs here.
pub trait Platform: Send + Sync {
    // ---------------------------
    // App data paths
    // ---------------------------

    /// Returns an app-specific config dir, e.g.:
    /// - Windows: %APPDATA%/<org>/<app>/config
    /// - macOS: ~/Library/Application Support/<qualifier>.<org>.<app>
    /// - Linux: ~/.config/<app>
    fn config_dir(&self, app_name: &str) -> Result<PathBuf>;
}

pub mod native;
