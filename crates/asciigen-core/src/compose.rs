//! Glyph compositing
//!
//! Stitches the glyphs of each input character side by side, one output line
//! per glyph row.

use crate::error::Result;
use crate::font::{font_by_name, AsciiFont, Glyph};

/// Compose `text` with the named built-in font
pub fn compose(text: &str, font_name: &str) -> Result<String> {
    let font = font_by_name(font_name)?;
    Ok(compose_with(text, font))
}

/// Compose `text` with an already resolved font.
///
/// Input is uppercased before lookup. Characters the font cannot draw take the
/// space glyph's rows, or a single space when the font has no space glyph.
/// The banner height comes from the first drawable character.
pub fn compose_with(text: &str, font: &AsciiFont) -> String {
    let text = text.to_uppercase();
    if text.is_empty() {
        return String::new();
    }

    let space = font.glyph(' ');
    let Some(height) = text
        .chars()
        .find_map(|ch| font.glyph(ch))
        .or(space)
        .map(|glyph| glyph.len())
    else {
        return String::new();
    };

    let mut lines = vec![String::new(); height];
    for ch in text.chars() {
        let glyph = font.glyph(ch).or(space);
        for (row, line) in lines.iter_mut().enumerate() {
            match glyph {
                Some(glyph) => push_row(line, glyph, row),
                None => line.push(' '),
            }
        }
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append one row of a glyph, or blank space as wide as its first row when
/// the glyph is shorter than the banner
fn push_row(line: &mut String, glyph: Glyph, row: usize) {
    match glyph.get(row) {
        Some(text) => line.push_str(text),
        None => {
            let width = glyph.first().map_or(0, |first| first.chars().count());
            line.push_str(&" ".repeat(width));
        }
    }
}
