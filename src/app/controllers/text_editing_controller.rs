// src/app/controllers/text_editing_controller.rs

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::prefs::TextEditingPrefs;

pub fn handle(state: &mut AppState, action: &Action) -> bool {
    let prefs = &mut state.prefs;

    match action {
        Action::SetTabWidth(n) => prefs.set_tab_width(*n),
        Action::SetFontSize(n) => prefs.set_font_size(*n),
        Action::SetLineHeight(x) => prefs.set_line_height(*x),
        Action::SetCustomFont(on) => prefs.font.custom = *on,
        Action::SetFontName(name) => prefs.set_font_name(name),
        Action::SetAutocompleteBraces(on) => prefs.autocomplete_braces = *on,
        Action::SetTypeOverCompletion(on) => prefs.enable_type_over_completion = *on,
        Action::SetWrapLines(on) => prefs.wrap_lines_to_editor_width = *on,
        Action::SetTextEncoding(enc) => prefs.text_encoding = *enc,
        Action::ResetPreferences => {
            tracing::info!("resetting text editing preferences to defaults");
            *prefs = TextEditingPrefs::default();
        }
        _ => return false,
    }

    // Numeric fields always show the stored (clamped) value after a change.
    state.sync_drafts();
    state.prefs_dirty = true;
    state.autosave_paused = false;
    true
}
