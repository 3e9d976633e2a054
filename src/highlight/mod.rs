//! Case-insensitive occurrence highlighting.
//!
//! Splits a line of text into matched / unmatched runs for a query so the UI
//! can paint the matches with a stronger colour than the surrounding text.
//!
//! # Matching rules
//!
//! - Matches never overlap: after a hit, scanning resumes at its end.
//! - Both sides are folded with `char::to_lowercase`. No Unicode
//!   normalization is done, so `"é"` (U+00E9) and `"e\u{301}"` are different.
//! - A match always covers whole source characters. Spans are byte offsets
//!   into the original (unfolded) source.
//! - An empty query matches nothing.

use std::ops::Range;

/// Half-open byte range `[start, end)` of one occurrence in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Matched,
    Unmatched,
}

/// A run of source text, tagged with whether it matched the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    pub fn matched(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Matched,
        }
    }

    pub fn unmatched(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Unmatched,
        }
    }

    pub fn is_match(&self) -> bool {
        self.kind == SegmentKind::Matched
    }
}

/// Lazy left-to-right scan for non-overlapping occurrences.
///
/// Use this instead of [`find_occurrences`] when only the first hit matters
/// (e.g. filtering a list by "contains").
pub struct Occurrences<'a> {
    source: &'a str,
    needle: Vec<char>,
    cursor: usize,
}

impl<'a> Occurrences<'a> {
    pub fn new(source: &'a str, query: &str) -> Self {
        Self {
            source,
            needle: fold(query),
            cursor: 0,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        if self.needle.is_empty() || self.cursor >= self.source.len() {
            return None;
        }

        let from = self.cursor;
        let rest = &self.source[from..];

        for (offset, _) in rest.char_indices() {
            let start = from + offset;
            if let Some(end) = match_at(self.source, start, &self.needle) {
                self.cursor = end;
                return Some(MatchSpan { start, end });
            }
        }

        self.cursor = self.source.len();
        None
    }
}

/// All non-overlapping case-insensitive occurrences of `query` in `source`,
/// in order of appearance.
pub fn find_occurrences(source: &str, query: &str) -> Vec<MatchSpan> {
    Occurrences::new(source, query).collect()
}

/// True if `query` occurs at least once in `source`.
pub fn contains_occurrence(source: &str, query: &str) -> bool {
    Occurrences::new(source, query).next().is_some()
}

/// Partitions `source` into alternating unmatched / matched segments.
///
/// Concatenating the returned segments gives back `source`. Empty segments
/// are never emitted.
pub fn render_highlighted<'a>(source: &'a str, query: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut current = 0usize;

    for span in Occurrences::new(source, query) {
        if span.start > current {
            segments.push(Segment::unmatched(&source[current..span.start]));
        }
        segments.push(Segment::matched(&source[span.range()]));
        current = span.end;
    }

    if current < source.len() {
        segments.push(Segment::unmatched(&source[current..]));
    }

    segments
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Byte offset just past the match if `needle` (already folded) matches the
/// source starting at byte `start`.
fn match_at(source: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut want = needle.iter().copied().peekable();

    for (offset, ch) in source[start..].char_indices() {
        for lower in ch.to_lowercase() {
            // Running out of needle mid-character is a miss.
            if want.next() != Some(lower) {
                return None;
            }
        }

        if want.peek().is_none() {
            return Some(start + offset + ch.len_utf8());
        }
    }

    None
}
