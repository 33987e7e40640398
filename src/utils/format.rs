//! Monospace-terminal padding that counts CJK and full-width characters as two columns.

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   // CJK unified ideographs
        | 0x3000..=0x303F // CJK symbols and punctuation
        | 0xFF00..=0xFFEF // halfwidth and fullwidth forms
    )
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

/// Pads on the right up to `target_width` columns. Never truncates.
pub fn left_align(s: &str, target_width: usize) -> String {
    let pad = target_width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
