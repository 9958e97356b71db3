//! # asciigen Core
//!
//! The glyph composition engine behind asciigen.
//!
//! This crate provides:
//! - Built-in figlet-style fonts (`simple`, `block`)
//! - Line-by-line compositing of glyphs into banners
//! - Foreground coloring with standard SGR escape sequences
//! - Border framing that measures width without escape codes
//!
//! ```text
//! ++++++++++++
//! +          +
//! +  █████╗  +
//! + ██╔══██╗ +
//! + ███████║ +
//! + ██╔══██║ +
//! + ██║  ██║ +
//! + ╚═╝  ╚═╝ +
//! +          +
//! ++++++++++++
//! ```
//!
//! Everything here is pure: no I/O, no global mutable state.

pub mod color;
pub mod compose;
pub mod decorate;
pub mod error;
pub mod font;
pub mod generator;

pub use color::{list_colors, Color, RESET};
pub use compose::{compose, compose_with};
pub use decorate::{
    apply_border, apply_color, colorize, strip_ansi, visible_width, DEFAULT_PADDING,
    MAX_PADDING,
};
pub use error::{CoreError, Result};
pub use font::{
    all_fonts, font_by_name, list_fonts, AsciiFont, Glyph, DEFAULT_FONT, FONT_BLOCK, FONT_SIMPLE,
};
pub use generator::{generate, BannerConfig, BannerGenerator};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
