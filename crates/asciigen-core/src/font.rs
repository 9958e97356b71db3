//! # Font Registry
//!
//! Built-in figlet-style fonts for banner text.
//!
//! Each font maps the uppercase letters `A`-`Z` and space to a glyph, a fixed
//! stack of text rows. Everything else (digits, punctuation, lowercase) is
//! unsupported and rendered as blank space by the compositor.
//!
//! ```text
//! * **
//! * **
//! ****
//! * **
//! * **
//! ```

use crate::error::{CoreError, Result};

/// The rows of one character, top to bottom
pub type Glyph = &'static [&'static str];

/// ASCII font for text rendering
#[derive(Debug, Clone, Copy)]
pub struct AsciiFont {
    pub name: &'static str,
    glyphs: fn(char) -> Option<Glyph>,
}

impl AsciiFont {
    /// Create a font from a glyph lookup function.
    ///
    /// The lookup is called with already-uppercased characters and should
    /// return `None` for anything the font cannot draw.
    pub const fn new(name: &'static str, glyphs: fn(char) -> Option<Glyph>) -> Self {
        Self { name, glyphs }
    }

    /// Look up the glyph for a character
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        (self.glyphs)(ch)
    }

    /// Nominal row count, taken from the space glyph (0 if the font has none)
    pub fn height(&self) -> usize {
        self.glyph(' ').map_or(0, |g| g.len())
    }

    /// Render text with this font
    pub fn render(&self, text: &str) -> String {
        crate::compose::compose_with(text, self)
    }
}

/// Simple font, drawn with asterisks
pub const FONT_SIMPLE: AsciiFont = AsciiFont::new("simple", simple_glyph);

/// Block font (box-drawing shadowed capitals)
pub const FONT_BLOCK: AsciiFont = AsciiFont::new("block", block_glyph);

/// Name of the font used when none is given
pub const DEFAULT_FONT: &str = "simple";

/// Get all available fonts
pub fn all_fonts() -> &'static [&'static AsciiFont] {
    &[&FONT_SIMPLE, &FONT_BLOCK]
}

/// Find a built-in font by name
pub fn font_by_name(name: &str) -> Result<&'static AsciiFont> {
    all_fonts()
        .iter()
        .copied()
        .find(|font| font.name == name)
        .ok_or_else(|| CoreError::unknown_font(name))
}

/// Names of all available fonts, in registry order
pub fn list_fonts() -> Vec<&'static str> {
    all_fonts().iter().map(|font| font.name).collect()
}

fn simple_glyph(ch: char) -> Option<Glyph> {
    match ch {
        'A' => Some(&[" * ", "* *", "***", "* *", "* *"]),
        'B' => Some(&["** ", "* *", "** ", "* *", "** "]),
        'C' => Some(&[" **", "* ", "* ", "* ", " **"]),
        'D' => Some(&["** ", "* *", "* *", "* *", "** "]),
        'E' => Some(&["***", "* ", "** ", "* ", "***"]),
        'F' => Some(&["***", "* ", "** ", "* ", "* "]),
        'G' => Some(&[" **", "* ", "* *", "* *", " **"]),
        'H' => Some(&["* *", "* *", "***", "* *", "* *"]),
        'I' => Some(&["*", "*", "*", "*", "*"]),
        'J' => Some(&[" *", " *", " *", "* *", " * "]),
        'K' => Some(&["* *", "** ", "* ", "** ", "* *"]),
        'L' => Some(&["* ", "* ", "* ", "* ", "***"]),
        'M' => Some(&["* *", "***", "* *", "* *", "* *"]),
        'N' => Some(&["* *", "***", "***", "***", "* *"]),
        'O' => Some(&[" * ", "* *", "* *", "* *", " * "]),
        'P' => Some(&["** ", "* *", "** ", "* ", "* "]),
        'Q' => Some(&[" * ", "* *", "* *", "***", " **"]),
        'R' => Some(&["** ", "* *", "** ", "** ", "* *"]),
        'S' => Some(&[" **", "* ", " * ", " *", "** "]),
        'T' => Some(&["***", " * ", " * ", " * ", " * "]),
        'U' => Some(&["* *", "* *", "* *", "* *", " * "]),
        'V' => Some(&["* *", "* *", "* *", " * ", " * "]),
        'W' => Some(&["* *", "* *", "* *", "***", "* *"]),
        'X' => Some(&["* *", " * ", " * ", " * ", "* *"]),
        'Y' => Some(&["* *", "* *", " * ", " * ", " * "]),
        'Z' => Some(&["***", " *", " * ", "* ", "***"]),
        ' ' => Some(&[" ", " ", " ", " ", " "]),
        _ => None,
    }
}

fn block_glyph(ch: char) -> Option<Glyph> {
    match ch {
        'A' => Some(&[" █████╗ ", "██╔══██╗", "███████║", "██╔══██║", "██║  ██║", "╚═╝  ╚═╝"]),
        'B' => Some(&["██████╗ ", "██╔══██╗", "██████╔╝", "██╔══██╗", "██████╔╝", "╚═════╝ "]),
        'C' => Some(&[" ██████╗", "██╔════╝", "██║     ", "██║     ", "╚██████╗", " ╚═════╝"]),
        'D' => Some(&["██████╗ ", "██╔══██╗", "██║  ██║", "██║  ██║", "██████╔╝", "╚═════╝ "]),
        'E' => Some(&["███████╗", "██╔════╝", "█████╗  ", "██╔══╝  ", "███████╗", "╚══════╝"]),
        'F' => Some(&["███████╗", "██╔════╝", "█████╗  ", "██╔══╝  ", "██║     ", "╚═╝     "]),
        'G' => Some(&[
            " ██████╗ ", "██╔════╝ ", "██║  ███╗", "██║   ██║", "╚██████╔╝", " ╚═════╝ ",
        ]),
        'H' => Some(&["██╗  ██╗", "██║  ██║", "███████║", "██╔══██║", "██║  ██║", "╚═╝  ╚═╝"]),
        'I' => Some(&["██╗", "██║", "██║", "██║", "██║", "╚═╝"]),
        'J' => Some(&["     ██╗", "     ██║", "     ██║", "██   ██║", "╚█████╔╝", " ╚════╝ "]),
        'K' => Some(&["██╗ ██╗", "██║██╔╝", "█████╔╝ ", "██╔═██╗ ", "██║  ██╗", "╚═╝  ╚═╝"]),
        'L' => Some(&["██╗     ", "██║     ", "██║     ", "██║     ", "███████╗", "╚══════╝"]),
        'M' => Some(&[
            "███╗   ███╗", "████╗ ████║", "██╔████╔██║", "██║╚██╔╝██║", "██║ ╚═╝ ██║", "╚═╝     ╚═╝",
        ]),
        'N' => Some(&[
            "███╗   ██╗", "████╗  ██║", "██╔██╗ ██║", "██║╚██╗██║", "██║ ╚████║", "╚═╝  ╚═══╝",
        ]),
        'O' => Some(&[
            " ██████╗ ", "██╔═══██╗", "██║   ██║", "██║   ██║", "╚██████╔╝", " ╚═════╝ ",
        ]),
        'P' => Some(&["██████╗ ", "██╔══██╗", "██████╔╝", "██╔═══╝ ", "██║     ", "╚═╝     "]),
        'Q' => Some(&[
            " ██████╗ ", "██╔═══██╗", "██║   ██║", "██║▄▄ ██║", "╚██████╔╝", " ╚══▀▀═╝ ",
        ]),
        'R' => Some(&["██████╗ ", "██╔══██╗", "██████╔╝", "██╔══██╗", "██║  ██║", "╚═╝  ╚═╝"]),
        'S' => Some(&["███████╗", "██╔════╝", "███████╗", "╚════██║", "███████║", "╚══════╝"]),
        'T' => Some(&[
            "████████╗", "╚══██╔══╝", "   ██║   ", "   ██║   ", "   ██║   ", "   ╚═╝   ",
        ]),
        'U' => Some(&["██╗  ██╗", "██║  ██║", "██║  ██║", "██║  ██║", "╚██████╔╝", " ╚═════╝ "]),
        'V' => Some(&["██╗  ██╗", "██║  ██║", "██║  ██║", "╚██╗██╔╝", " ╚████╔╝ ", "  ╚═══╝  "]),
        'W' => Some(&[
            "██╗    ██╗", "██║    ██║", "██║ █╗ ██║", "██║███╗██║", "╚███╔███╔╝", " ╚══╝╚══╝ ",
        ]),
        'X' => Some(&["██╗  ██╗", "╚██╗██╔╝", " ╚███╔╝ ", " ██╔██╗ ", "██╔╝ ██╗", "╚═╝  ╚═╝"]),
        'Y' => Some(&["██╗  ██╗", "╚██╗██╔╝", " ╚████╔╝ ", "  ╚██╔╝  ", "   ██║   ", "   ╚═╝   "]),
        'Z' => Some(&["███████╗", "╚══███╔╝", "  ███╔╝ ", " ███╔╝  ", "███████╗", "╚══════╝"]),
        ' ' => Some(&["        ", "        ", "        ", "        ", "        ", "        "]),
        _ => None,
    }
}
