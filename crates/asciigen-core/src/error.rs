//! Error types for asciigen core

use thiserror::Error;

/// Result type for asciigen core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Font name is not one of the built-in fonts
    #[error("Font '{name}' not available. Available fonts: {}", .available.join(", "))]
    UnknownFont {
        name: String,
        available: Vec<&'static str>,
    },

    /// Color name is not in the color table
    #[error("Color '{name}' not available. Available colors: {}", .available.join(", "))]
    UnknownColor {
        name: String,
        available: Vec<&'static str>,
    },
}

impl CoreError {
    pub(crate) fn unknown_font(name: &str) -> Self {
        Self::UnknownFont {
            name: name.to_string(),
            available: crate::font::list_fonts(),
        }
    }

    pub(crate) fn unknown_color(name: &str) -> Self {
        Self::UnknownColor {
            name: name.to_string(),
            available: crate::color::list_colors(),
        }
    }
}
