use super::*;
use crate::platform::Platform;
use crate::prefs::{PrefsStore, TextEditingPrefs, TextEncoding};
use common::{TempPlatform, state_in};
use std::path::PathBuf;
use std::sync::Arc;

mod common {
    use super::*;

    pub(super) struct TempPlatform {
        pub(super) dir: Option<PathBuf>,
    }

    impl Platform for TempPlatform {
        fn config_dir(&self, _app_name: &str) -> anyhow::Result<PathBuf> {
            self.dir
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no config dir in this environment"))
        }
    }

    pub(super) fn state_in(dir: &std::path::Path) -> AppState {
        AppState::new(Arc::new(TempPlatform {
            dir: Some(dir.to_path_buf()),
        }))
    }
}

mod new {
    use super::*;

    #[test]
    fn test_loads_saved_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let mut saved = TextEditingPrefs::default();
        saved.set_tab_width(8);
        PrefsStore::in_dir(dir.path()).save(&saved).unwrap();

        let state = state_in(dir.path());

        assert_eq!(state.prefs.default_tab_width, 8);
        assert_eq!(state.drafts.tab_width, "8");
        assert!(state.status.is_none());
        assert!(!state.prefs_dirty);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults_with_status() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("preferences.json"), "garbage").unwrap();

        let state = state_in(dir.path());

        assert_eq!(state.prefs, TextEditingPrefs::default());
        assert!(state.status.unwrap().starts_with("Could not load preferences"));
    }

    #[test]
    fn test_without_config_dir_changes_are_session_only() {
        let mut state = AppState::new(Arc::new(TempPlatform { dir: None }));
        assert!(state.store.is_none());
        assert!(state.status.is_some());

        state.apply_action(Action::SetTabWidth(2));
        state.finalize_frame();

        assert_eq!(state.prefs.default_tab_width, 2);
        assert!(!state.prefs_dirty);
    }
}

mod text_editing {
    use super::*;

    #[test]
    fn test_setters_clamp_and_mark_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.apply_action(Action::SetTabWidth(20));
        state.apply_action(Action::SetFontSize(0));
        state.apply_action(Action::SetLineHeight(1.52));

        assert_eq!(state.prefs.default_tab_width, 8);
        assert_eq!(state.prefs.font.size, 1);
        assert_eq!(state.prefs.line_height_multiple, 1.5);
        assert!(state.prefs_dirty);
    }

    #[test]
    fn test_drafts_follow_stored_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.drafts.line_height = "typing...".to_string();

        state.apply_action(Action::SetLineHeight(1.0));

        assert_eq!(state.drafts.line_height, "1.00");
    }

    #[test]
    fn test_toggles_and_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.apply_action(Action::SetAutocompleteBraces(false));
        state.apply_action(Action::SetTypeOverCompletion(false));
        state.apply_action(Action::SetWrapLines(false));
        state.apply_action(Action::SetCustomFont(true));
        state.apply_action(Action::SetFontName("Iosevka".to_string()));
        state.apply_action(Action::SetTextEncoding(TextEncoding::IsoLatin1));

        let p = &state.prefs;
        assert!(!p.autocomplete_braces);
        assert!(!p.enable_type_over_completion);
        assert!(!p.wrap_lines_to_editor_width);
        assert!(p.font.custom);
        assert_eq!(p.font.name, "Iosevka");
        assert_eq!(p.text_encoding, TextEncoding::IsoLatin1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.apply_action(Action::SetTabWidth(2));
        state.apply_action(Action::SetWrapLines(false));

        state.apply_action(Action::ResetPreferences);

        assert_eq!(state.prefs, TextEditingPrefs::default());
        assert_eq!(state.drafts.tab_width, "4");
    }
}

mod search {
    use super::*;

    #[test]
    fn test_query_does_not_touch_prefs() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.apply_action(Action::SetSearchQuery("font".to_string()));
        assert_eq!(state.search.query, "font");
        assert!(!state.prefs_dirty);

        state.apply_action(Action::ClearSearch);
        assert!(state.search.query.is_empty());
    }
}

mod persistence {
    use super::*;

    #[test]
    fn test_finalize_frame_saves_dirty_prefs() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.apply_action(Action::SetFontSize(16));
        state.finalize_frame();

        assert!(!state.prefs_dirty);
        let reloaded = PrefsStore::in_dir(dir.path()).load().unwrap();
        assert_eq!(reloaded.font.size, 16);
    }

    #[test]
    fn test_clean_state_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.finalize_frame();

        assert!(!dir.path().join("preferences.json").exists());
    }

    #[test]
    fn test_explicit_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.apply_action(Action::SavePreferences);

        assert!(dir.path().join("preferences.json").exists());
    }

    #[test]
    fn test_failed_save_keeps_state_dirty() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be.
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").unwrap();
        let mut state = state_in(&blocked);

        state.apply_action(Action::SetTabWidth(3));
        state.finalize_frame();

        assert!(state.prefs_dirty);
        assert!(state.status.unwrap().starts_with("Could not save preferences"));
    }

    #[test]
    fn test_failed_save_waits_for_next_change() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").unwrap();
        let mut state = state_in(&blocked);

        state.apply_action(Action::SetTabWidth(3));
        state.finalize_frame();
        assert!(state.autosave_paused);

        // Unblock the directory; idle frames must not retry on their own.
        std::fs::remove_file(&blocked).unwrap();
        std::fs::create_dir(&blocked).unwrap();
        state.finalize_frame();
        state.finalize_frame();
        assert!(state.prefs_dirty);
        assert!(!blocked.join("preferences.json").exists());

        state.apply_action(Action::SetTabWidth(5));
        state.finalize_frame();

        assert!(!state.prefs_dirty);
        assert!(!state.autosave_paused);
        assert!(state.status.is_none());
        let reloaded = PrefsStore::in_dir(&blocked).load().unwrap();
        assert_eq!(reloaded.default_tab_width, 5);
    }

    #[test]
    fn test_explicit_save_retries_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").unwrap();
        let mut state = state_in(&blocked);

        state.apply_action(Action::SetFontSize(20));
        state.finalize_frame();
        assert!(state.autosave_paused);

        std::fs::remove_file(&blocked).unwrap();
        std::fs::create_dir(&blocked).unwrap();
        state.apply_action(Action::SavePreferences);

        assert!(!state.prefs_dirty);
        assert_eq!(PrefsStore::in_dir(&blocked).load().unwrap().font.size, 20);
    }
}
