//! Text editing preferences for a source-code editor, plus the
//! case-insensitive occurrence highlighter used by the settings search.

pub mod app;
pub mod format;
pub mod highlight;
pub mod platform;
pub mod prefs;
