// src/app/state.rs
use std::sync::Arc;

use crate::format;
use crate::platform::Platform;
use crate::prefs::{PrefsStore, TextEditingPrefs};

pub const APP_NAME: &str = "EditPrefs";

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
}

/// Text typed into fields before it is committed.
///
/// Re-synced from the stored values after every commit so a rejected entry
/// snaps back to the last valid value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDrafts {
    pub tab_width: String,
    pub font_size: String,
    pub line_height: String,
    pub font_name: String,
}

impl FieldDrafts {
    pub fn from_prefs(prefs: &TextEditingPrefs) -> Self {
        Self {
            tab_width: prefs.default_tab_width.to_string(),
            font_size: prefs.font.size.to_string(),
            line_height: format::format_fixed2(prefs.line_height_multiple),
            font_name: prefs.font.name.clone(),
        }
    }
}

pub struct AppState {
    /// `None` when no config directory could be resolved; changes then live
    /// for this session only.
    pub store: Option<PrefsStore>,

    pub prefs: TextEditingPrefs,
    pub drafts: FieldDrafts,
    pub search: SearchState,

    /// Set by preference-changing actions, cleared by a successful save.
    pub prefs_dirty: bool,
    /// Set after a failed save so the end-of-frame hook stops retrying.
    pub autosave_paused: bool,
    pub status: Option<String>,

    pub last_window_title: Option<String>,
}

impl AppState {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        let store = match platform.config_dir(APP_NAME) {
            Ok(dir) => Some(PrefsStore::in_dir(&dir)),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "no config directory, preferences will not persist");
                None
            }
        };

        let (prefs, status) = match store.as_ref().map(|s| s.load()) {
            Some(Ok(p)) => (p, None),
            Some(Err(e)) => {
                tracing::warn!(error = %format!("{e:#}"), "failed to load preferences");
                (
                    TextEditingPrefs::default(),
                    Some(format!("Could not load preferences: {e:#}")),
                )
            }
            None => (
                TextEditingPrefs::default(),
                Some("Preferences will not be saved (no config directory)".to_string()),
            ),
        };

        Self {
            store,
            drafts: FieldDrafts::from_prefs(&prefs),
            prefs,
            search: SearchState::default(),
            prefs_dirty: false,
            autosave_paused: false,
            status,
            last_window_title: None,
        }
    }

    pub fn sync_drafts(&mut self) {
        self.drafts = FieldDrafts::from_prefs(&self.prefs);
    }
}
