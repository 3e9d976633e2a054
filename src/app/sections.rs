// src/app/sections.rs

use crate::highlight::contains_occurrence;

/// Sections of the Text Editing preferences pane, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefSection {
    DefaultTabWidth,
    Font,
    FontSize,
    LineHeight,
    CodeCompletion,
    LineWrapping,
    DefaultTextEncoding,
}

impl PrefSection {
    pub const ALL: [PrefSection; 7] = [
        PrefSection::DefaultTabWidth,
        PrefSection::Font,
        PrefSection::FontSize,
        PrefSection::LineHeight,
        PrefSection::CodeCompletion,
        PrefSection::LineWrapping,
        PrefSection::DefaultTextEncoding,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PrefSection::DefaultTabWidth => "Default Tab Width",
            PrefSection::Font => "Font",
            PrefSection::FontSize => "Font Size",
            PrefSection::LineHeight => "Line Height",
            PrefSection::CodeCompletion => "Code completion",
            PrefSection::LineWrapping => "Line Wrapping",
            PrefSection::DefaultTextEncoding => "Default Text Encoding",
        }
    }
}

/// Sections whose title contains `query` (case-insensitive). A blank query
/// shows everything.
pub fn visible_sections(query: &str) -> Vec<PrefSection> {
    let q = query.trim();
    if q.is_empty() {
        return PrefSection::ALL.to_vec();
    }

    PrefSection::ALL
        .into_iter()
        .filter(|s| contains_occurrence(s.title(), q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_shows_everything() {
        assert_eq!(visible_sections(""), PrefSection::ALL.to_vec());
        assert_eq!(visible_sections("   "), PrefSection::ALL.to_vec());
    }

    #[test]
    fn test_filter_keeps_display_order() {
        assert_eq!(
            visible_sections("font"),
            vec![PrefSection::Font, PrefSection::FontSize]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        assert_eq!(
            visible_sections("LINE"),
            vec![PrefSection::LineHeight, PrefSection::LineWrapping]
        );
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(
            visible_sections("  encoding "),
            vec![PrefSection::DefaultTextEncoding]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(visible_sections("theme").is_empty());
    }
}
