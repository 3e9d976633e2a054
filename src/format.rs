use std::ops::RangeInclusive;

/// Parses a whole number typed into a numeric field. Anything that is not
/// plain digits, or falls outside `range`, is rejected.
pub fn parse_bounded_int(text: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let v: u32 = t.parse().ok()?;
    range.contains(&v).then_some(v)
}

pub fn parse_bounded_float(text: &str, range: &RangeInclusive<f32>) -> Option<f32> {
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let v: f32 = t.parse().ok()?;
    (v.is_finite() && range.contains(&v)).then_some(v)
}

/// Two fraction digits, e.g. `1.45`, `2.00`.
pub fn format_fixed2(v: f32) -> String {
    format!("{:.2}", v)
}
