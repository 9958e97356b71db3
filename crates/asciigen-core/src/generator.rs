//! Banner generation
//!
//! Validates the font and color names, composes the text, then colors and
//! frames the result.

use crate::color::Color;
use crate::compose::compose_with;
use crate::decorate::{apply_border, colorize, DEFAULT_PADDING};
use crate::error::Result;
use crate::font::{font_by_name, DEFAULT_FONT};

/// Options for one banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    /// Built-in font name
    pub font: String,
    /// Foreground color name (None = uncolored)
    pub color: Option<String>,
    /// Border character (None = no frame)
    pub border: Option<char>,
    /// Blank rows and columns between frame and text (clamped to `MAX_PADDING`)
    pub padding: usize,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            color: None,
            border: None,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Banner generator
#[derive(Debug, Clone, Default)]
pub struct BannerGenerator {
    config: BannerConfig,
}

impl BannerGenerator {
    /// Create a new generator with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: BannerConfig) -> Self {
        Self { config }
    }

    /// Options this generator renders with
    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    /// Render `text` as a banner.
    ///
    /// The font is checked before the color, so a call with both names wrong
    /// reports the font. An empty color name counts as no color.
    pub fn render(&self, text: &str) -> Result<String> {
        let font = font_by_name(&self.config.font)?;
        let color = self
            .config
            .color
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::parse::<Color>)
            .transpose()?;

        tracing::debug!(
            font = font.name,
            color = ?color,
            border = ?self.config.border,
            chars = text.chars().count(),
            "Rendering banner"
        );

        let mut banner = compose_with(text, font);
        if let Some(color) = color {
            banner = colorize(&banner, color);
        }
        if let Some(border) = self.config.border {
            banner = apply_border(&banner, border, self.config.padding);
        }

        Ok(banner)
    }
}

/// Render `text` with the given font, optional color and optional border,
/// using the default padding
pub fn generate(text: &str, font: &str, color: Option<&str>, border: Option<char>) -> Result<String> {
    BannerGenerator::with_config(BannerConfig {
        font: font.to_string(),
        color: color.map(str::to_string),
        border,
        padding: DEFAULT_PADDING,
    })
    .render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::RESET;
    use crate::decorate::strip_ansi;
    use crate::error::CoreError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_simple() {
        let banner = generate("HI", DEFAULT_FONT, None, None).unwrap();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(banner.contains('*'));
        assert!(lines.iter().all(|line| line.chars().count() <= 4));
    }

    #[test]
    fn test_generate_hello() {
        let banner = generate("Hello", "simple", None, None).unwrap();
        assert!(!banner.trim().is_empty());
        assert!(banner.contains('*'));
    }

    #[test]
    fn test_generate_block_with_unsupported() {
        let banner = generate("W1rld", "block", None, None).unwrap();
        assert!(banner.contains('█'));
        assert_eq!(banner.lines().count(), 6);
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(generate("", "simple", None, None).unwrap(), "");
        assert_eq!(generate("", "block", Some("red"), Some('#')).unwrap(), "");
    }

    #[test]
    fn test_generate_bordered_block() {
        let banner = generate("A", "block", None, Some('+')).unwrap();
        let lines: Vec<&str> = banner.lines().collect();
        let first = lines[0];
        let last = lines[lines.len() - 1];

        assert!(first.chars().all(|ch| ch == '+'));
        assert!(last.chars().all(|ch| ch == '+'));
        // " █████╗ " trims to 7 visible chars at most, "██╔══██╗" is 8
        assert_eq!(first.chars().count(), 8 + 2 + 2);
        assert_eq!(lines.len(), 6 + 2 + 2);
    }

    #[test]
    fn test_generate_colored() {
        let banner = generate("HI", "simple", Some("green"), None).unwrap();
        assert!(banner.starts_with("\x1b[32m"));
        assert!(banner.ends_with(RESET));
        assert_eq!(banner.matches(RESET).count(), 1);
        assert!(banner.contains(&generate("HI", "simple", None, None).unwrap()));
    }

    #[test]
    fn test_generate_colored_and_bordered() {
        let banner = generate("HI", "simple", Some("bright_blue"), Some('#')).unwrap();
        let plain = generate("HI", "simple", None, Some('#')).unwrap();
        assert!(banner.contains("\x1b[94m"));
        assert_eq!(strip_ansi(&banner), plain);
    }

    #[test]
    fn test_empty_color_name_is_ignored() {
        let banner = generate("HI", "simple", Some(""), None).unwrap();
        assert_eq!(banner, generate("HI", "simple", None, None).unwrap());
    }

    #[test]
    fn test_generate_invalid_font() {
        let err = generate("HI", "invalid", None, None).unwrap_err();
        assert!(matches!(err, CoreError::UnknownFont { .. }));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_generate_invalid_color() {
        let err = generate("HI", "simple", Some("invalid"), None).unwrap_err();
        assert!(matches!(err, CoreError::UnknownColor { .. }));
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn test_font_checked_before_color() {
        let err = generate("HI", "nope", Some("nope"), None).unwrap_err();
        assert!(matches!(err, CoreError::UnknownFont { .. }));
    }

    #[test]
    fn test_custom_padding() {
        let generator = BannerGenerator::with_config(BannerConfig {
            border: Some('='),
            padding: 0,
            ..BannerConfig::default()
        });
        let banner = generator.render("I").unwrap();
        assert_eq!(banner, "===\n=*=\n=*=\n=*=\n=*=\n=*=\n===");
    }

    #[test]
    fn test_default_config() {
        let generator = BannerGenerator::new();
        assert_eq!(generator.config().font, "simple");
        assert_eq!(generator.config().padding, 1);
        assert!(generator.config().color.is_none());
    }
}
