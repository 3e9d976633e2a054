use serde::{Deserialize, Serialize};

/// Default text encoding offered for new documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    Ascii,
    NonLossyAscii,
    Iso2022Jp,
    JapaneseEuc,
    IsoLatin1,
    IsoLatin2,
    MacOsRoman,
    Nextstep,
    ShiftJis,
    Symbol,
    Unicode,
    #[default]
    Utf8,
    Utf16,
    Utf16Be,
    Utf16Le,
    Utf32,
    Utf32Be,
    Utf32Le,
}

impl TextEncoding {
    /// Menu order. Groups are separated in the picker (see [`Self::menu_groups`]).
    pub const ALL: [TextEncoding; 18] = [
        TextEncoding::Ascii,
        TextEncoding::NonLossyAscii,
        TextEncoding::Iso2022Jp,
        TextEncoding::JapaneseEuc,
        TextEncoding::IsoLatin1,
        TextEncoding::IsoLatin2,
        TextEncoding::MacOsRoman,
        TextEncoding::Nextstep,
        TextEncoding::ShiftJis,
        TextEncoding::Symbol,
        TextEncoding::Unicode,
        TextEncoding::Utf8,
        TextEncoding::Utf16,
        TextEncoding::Utf16Be,
        TextEncoding::Utf16Le,
        TextEncoding::Utf32,
        TextEncoding::Utf32Be,
        TextEncoding::Utf32Le,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ASCII",
            TextEncoding::NonLossyAscii => "Non Lossy ASCII",
            TextEncoding::Iso2022Jp => "ISO 2022 Japan",
            TextEncoding::JapaneseEuc => "Japanese EUC",
            TextEncoding::IsoLatin1 => "ISO Latin 1",
            TextEncoding::IsoLatin2 => "ISO Latin 2",
            TextEncoding::MacOsRoman => "macOS Roman",
            TextEncoding::Nextstep => "Nextstep",
            TextEncoding::ShiftJis => "Shift JIS",
            TextEncoding::Symbol => "Symbol",
            TextEncoding::Unicode => "Unicode",
            TextEncoding::Utf8 => "Unicode (UTF-8)",
            TextEncoding::Utf16 => "Unicode (UTF-16)",
            TextEncoding::Utf16Be => "Unicode (UTF-16) Big Endian",
            TextEncoding::Utf16Le => "Unicode (UTF-16) Little Endian",
            TextEncoding::Utf32 => "Unicode (UTF-32)",
            TextEncoding::Utf32Be => "Unicode (UTF-32) Big Endian",
            TextEncoding::Utf32Le => "Unicode (UTF-32) Little Endian",
        }
    }

    /// [`Self::ALL`] split into the groups shown between menu separators.
    pub fn menu_groups() -> [&'static [TextEncoding]; 7] {
        let all: &'static [TextEncoding] = &Self::ALL;
        [
            &all[0..2],   // ASCII
            &all[2..4],   // Japanese
            &all[4..7],   // Latin / Roman
            &all[7..10],  // Legacy
            &all[10..12], // Unicode, UTF-8
            &all[12..15], // UTF-16
            &all[15..18], // UTF-32
        ]
    }
}
