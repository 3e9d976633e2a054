use super::actions::Action;
use super::state::AppState;

use super::controllers::{search_controller, text_editing_controller};

impl AppState {
    /// Write preferences to disk. On failure the state stays dirty and
    /// autosave pauses until the next preference change or explicit save.
    pub fn save_preferences(&mut self) {
        let Some(store) = self.store.as_ref() else {
            self.prefs_dirty = false;
            return;
        };

        match store.save(&self.prefs) {
            Ok(()) => {
                self.prefs_dirty = false;
                self.autosave_paused = false;
                self.status = None;
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "failed to save preferences");
                self.autosave_paused = true;
                self.status = Some(format!("Could not save preferences: {e:#}"));
            }
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        tracing::debug!(?action, "apply");

        if search_controller::handle(self, &action) {
            return;
        }
        if text_editing_controller::handle(self, &action) {
            return;
        }

        match action {
            Action::SavePreferences => self.save_preferences(),
            other => tracing::warn!(action = ?other, "unhandled action"),
        }
    }

    /// End-of-frame effects: persist preference changes made this frame.
    pub fn finalize_frame(&mut self) {
        if self.prefs_dirty && !self.autosave_paused {
            self.save_preferences();
        }
    }
}

#[cfg(test)]
mod tests;
