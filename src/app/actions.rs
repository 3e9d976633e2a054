use crate::prefs::TextEncoding;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Text editing preferences
    SetTabWidth(u32),
    SetFontSize(u32),
    SetLineHeight(f32),
    SetCustomFont(bool),
    SetFontName(String),
    SetAutocompleteBraces(bool),
    SetTypeOverCompletion(bool),
    SetWrapLines(bool),
    SetTextEncoding(TextEncoding),

    // Section search
    SetSearchQuery(String),
    ClearSearch,

    // Persistence
    SavePreferences,
    ResetPreferences,
}

impl Action {
    /// True for actions that change a stored preference value.
    pub fn mutates_prefs(&self) -> bool {
        matches!(
            self,
            Action::SetTabWidth(_)
                | Action::SetFontSize(_)
                | Action::SetLineHeight(_)
                | Action::SetCustomFont(_)
                | Action::SetFontName(_)
                | Action::SetAutocompleteBraces(_)
                | Action::SetTypeOverCompletion(_)
                | Action::SetWrapLines(_)
                | Action::SetTextEncoding(_)
                | Action::ResetPreferences
        )
    }
}
