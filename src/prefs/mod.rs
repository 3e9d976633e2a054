// src/prefs/mod.rs
//
// Text editing preferences: typed fields plus the valid range of each.
// Every setter keeps the value in range so nothing downstream has to re-check.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub mod encoding;
pub mod store;

pub use encoding::TextEncoding;
pub use store::{PreferencesFile, PrefsStore};

pub const TAB_WIDTH_RANGE: RangeInclusive<u32> = 1..=8;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 1..=288;
pub const LINE_HEIGHT_RANGE: RangeInclusive<f32> = 0.75..=2.0;

/// Line height moves in 0.05 increments.
pub const LINE_HEIGHT_STEP: f32 = 0.05;

const LINE_HEIGHT_STEPS_PER_UNIT: f32 = 20.0;

pub const DEFAULT_FONT_NAME: &str = "SFMono-Medium";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorFont {
    /// `false` means the system monospace font; `name` is ignored then.
    pub custom: bool,
    pub name: String,
    pub size: u32,
}

impl Default for EditorFont {
    fn default() -> Self {
        Self {
            custom: false,
            name: DEFAULT_FONT_NAME.to_string(),
            size: 11,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextEditingPrefs {
    pub default_tab_width: u32,
    pub font: EditorFont,
    pub line_height_multiple: f32,
    pub autocomplete_braces: bool,
    pub enable_type_over_completion: bool,
    pub wrap_lines_to_editor_width: bool,
    pub text_encoding: TextEncoding,
}

impl Default for TextEditingPrefs {
    fn default() -> Self {
        Self {
            default_tab_width: 4,
            font: EditorFont::default(),
            line_height_multiple: 1.45,
            autocomplete_braces: true,
            enable_type_over_completion: true,
            wrap_lines_to_editor_width: true,
            text_encoding: TextEncoding::default(),
        }
    }
}

impl TextEditingPrefs {
    pub fn set_tab_width(&mut self, width: u32) {
        self.default_tab_width = clamp_int(width, &TAB_WIDTH_RANGE);
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font.size = clamp_int(size, &FONT_SIZE_RANGE);
    }

    /// Clamps into [`LINE_HEIGHT_RANGE`] and snaps to the nearest
    /// [`LINE_HEIGHT_STEP`]. NaN and infinities are ignored.
    pub fn set_line_height(&mut self, multiple: f32) {
        if let Some(v) = snap_line_height(multiple) {
            self.line_height_multiple = v;
        }
    }

    pub fn set_font_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.font.name = if trimmed.is_empty() {
            DEFAULT_FONT_NAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    /// Copy with every field brought back into its valid range.
    ///
    /// Used after loading from disk, where values may have been hand-edited.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.set_tab_width(self.default_tab_width);
        out.set_font_size(self.font.size);
        out.set_font_name(&self.font.name);
        if snap_line_height(self.line_height_multiple).is_none() {
            out.line_height_multiple = Self::default().line_height_multiple;
        } else {
            out.set_line_height(self.line_height_multiple);
        }
        out
    }

    /// Font size actually used by the editor (custom or system).
    pub fn effective_font_size(&self) -> f32 {
        self.font.size as f32
    }
}

fn clamp_int(v: u32, range: &RangeInclusive<u32>) -> u32 {
    v.clamp(*range.start(), *range.end())
}

fn snap_line_height(v: f32) -> Option<f32> {
    if !v.is_finite() {
        return None;
    }
    let clamped = v.clamp(*LINE_HEIGHT_RANGE.start(), *LINE_HEIGHT_RANGE.end());
    Some((clamped * LINE_HEIGHT_STEPS_PER_UNIT).round() / LINE_HEIGHT_STEPS_PER_UNIT)
}
