//! Cell metrics of terminal text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells a glyph covers when painted. Zero-width glyphs still take one.
pub fn glyph_width(glyph: char) -> u16 {
    glyph.width().unwrap_or(1).clamp(1, 2) as u16
}

/// Width and height in cells of multi-line text.
pub fn block_size(text: &str) -> (u16, u16) {
    let (width, height) = text
        .lines()
        .fold((0, 0), |(width, height), line| (line.width().max(width), height + 1));
    (saturate(width), saturate(height))
}

fn saturate(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
