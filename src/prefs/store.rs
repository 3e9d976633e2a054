// src/prefs/store.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::TextEditingPrefs;

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
pub const PREFERENCES_FILE_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreferencesFile {
    pub version: u32,

    #[serde(default)]
    pub text_editing: TextEditingPrefs,
}

impl PreferencesFile {
    pub fn new(text_editing: TextEditingPrefs) -> Self {
        Self {
            version: PREFERENCES_FILE_VERSION,
            text_editing,
        }
    }
}

/// Reads and writes `preferences.json` inside a config directory.
#[derive(Clone, Debug)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(PREFERENCES_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads preferences. A missing file yields defaults; out-of-range values
    /// are clamped.
    pub fn load(&self) -> Result<TextEditingPrefs> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no preferences file, using defaults");
            return Ok(TextEditingPrefs::default());
        }

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let file: PreferencesFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;

        if file.version > PREFERENCES_FILE_VERSION {
            tracing::warn!(
                version = file.version,
                "preferences file is newer than this build, reading known fields only"
            );
        }

        let prefs = file.text_editing.normalized();
        if prefs != file.text_editing {
            tracing::warn!(path = %self.path.display(), "clamped out-of-range preference values");
        }

        tracing::debug!(path = %self.path.display(), "loaded preferences");
        Ok(prefs)
    }

    pub fn save(&self, prefs: &TextEditingPrefs) -> Result<()> {
        let file = PreferencesFile::new(prefs.clone());
        let text = serde_json::to_string_pretty(&file).context("failed to serialize preferences")?;
        atomic_write(&self.path, &text)?;
        tracing::debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

fn atomic_write(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, text).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to replace {}", path.display()));
    }
    Ok(())
}
