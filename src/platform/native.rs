use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

use super::Platform;

#[derive(Clone, Debug, Default)]
pub struct NativePlatform;

impl NativePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for NativePlatform {
    fn config_dir(&self, app_name: &str) -> Result<PathBuf> {
        // org/qualifier can be anything stable for your app. Keep it constant.
        let pd = ProjectDirs::from("com", "EditPrefs", app_name)
            .context("Failed to resolve platform config directory (ProjectDirs::from)")?;
        Ok(pd.config_dir().to_path_buf())
    }
}
