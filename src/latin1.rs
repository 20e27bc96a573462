//! Lossy Latin-1 (ISO-8859-1) conversion for the single-byte built-in fonts.
//!
//! Characters above U+00FF cannot be shown by a WinAnsi-encoded Type 1 font,
//! so they are replaced with [`PLACEHOLDER`] instead of failing the run.

pub const PLACEHOLDER: char = '?';

fn to_latin1(c: char) -> Option<u8> {
    u8::try_from(u32::from(c)).ok()
}

/// Replace every character outside Latin-1 with [`PLACEHOLDER`].
pub fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| if to_latin1(c).is_some() { c } else { PLACEHOLDER })
        .collect()
}

/// Single-byte form of `s`, one byte per character.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| to_latin1(c).unwrap_or(PLACEHOLDER as u8))
        .collect()
}

pub fn count_unencodable(s: &str) -> usize {
    s.chars().filter(|&c| to_latin1(c).is_none()).count()
}
