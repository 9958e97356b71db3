//! # asciigen Configuration
//!
//! Default banner options, so a user can pick a favourite font, color or
//! border once instead of passing flags every time.
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`ASCIIGEN_BANNER__FONT=block`)
//! 3. User config (~/.config/asciigen/config.toml)
//! 4. Built-in defaults
//!
//! ```toml
//! [banner]
//! font = "block"
//! color = "bright_cyan"
//! border = "#"
//! padding = 2
//! ```

use anyhow::Context;
use asciigen_core::{BannerConfig, DEFAULT_FONT, DEFAULT_PADDING};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ASCIIGEN_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "asciigen", "asciigen")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/asciigen"))
}

/// Path of the user config file
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Banner defaults
    pub banner: BannerDefaults,
}

/// Defaults applied to every banner unless overridden on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerDefaults {
    /// Font name
    pub font: String,
    /// Foreground color name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Border character
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_border"
    )]
    pub border: Option<char>,
    /// Space between border and text
    pub padding: usize,
}

impl Default for BannerDefaults {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            color: None,
            border: None,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Accept a border as a one-char string or a single digit.
///
/// Environment values such as `ASCIIGEN_BANNER__BORDER=1` arrive as integers.
fn deserialize_border<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Border {
        Char(char),
        Digit(u64),
    }

    match Option::<Border>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Border::Char(ch)) => Ok(Some(ch)),
        Some(Border::Digit(n)) => u32::try_from(n)
            .ok()
            .and_then(|n| char::from_digit(n, 10))
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("border must be a single character, got {n}"))),
    }
}

impl Config {
    /// Load from the user config file and environment
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from a specific file and environment.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!("Loading configuration from {}", path.display());

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Options for the banner generator
    pub fn banner_config(&self) -> BannerConfig {
        BannerConfig {
            font: self.banner.font.clone(),
            color: self.banner.color.clone(),
            border: self.banner.border,
            padding: self.banner.padding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    // Loading reads the process environment, so every test that loads runs
    // inside a jail; jails are serialized and restore the environment.

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.banner.font, "simple");
        assert_eq!(config.banner.padding, 1);
        assert!(config.banner.color.is_none());
        assert!(config.banner.border.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[banner]"));
        assert!(toml.contains("font = \"simple\""));
        assert!(!toml.contains("color"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("absent.toml");
            let config = Config::load_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[banner]\nfont = \"block\"\ncolor = \"red\"\nborder = \"#\"\npadding = 2\n",
            )?;
            let path = jail.directory().join("config.toml");

            let banner = Config::load_from(&path)
                .map_err(|e| e.to_string())?
                .banner_config();
            assert_eq!(banner.font, "block");
            assert_eq!(banner.color.as_deref(), Some("red"));
            assert_eq!(banner.border, Some('#'));
            assert_eq!(banner.padding, 2);
            Ok(())
        });
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banner]\ncolor = \"cyan\"\n")?;
            let path = jail.directory().join("config.toml");

            let config = Config::load_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.banner.font, "simple");
            assert_eq!(config.banner.color.as_deref(), Some("cyan"));
            assert_eq!(config.banner.padding, 1);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banner]\npadding = \"wide\"\n")?;
            let path = jail.directory().join("config.toml");
            assert!(Config::load_from(&path).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_digit_border_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("ASCIIGEN_BANNER__BORDER", "1");
            let path = jail.directory().join("absent.toml");

            let config = Config::load_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.banner.border, Some('1'));
            Ok(())
        });
    }

    #[test]
    fn test_digit_border_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banner]\nborder = \"7\"\n")?;
            let path = jail.directory().join("config.toml");

            let config = Config::load_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.banner.border, Some('7'));
            Ok(())
        });
    }

    #[test]
    fn test_multi_digit_border_is_error() {
        Jail::expect_with(|jail| {
            jail.set_env("ASCIIGEN_BANNER__BORDER", "42");
            let path = jail.directory().join("absent.toml");

            let err = Config::load_from(&path).unwrap_err();
            assert!(format!("{err:#}").contains("border must be a single character"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[banner]\nfont = \"simple\"\nborder = \"*\"\n")?;
            let path = jail.directory().join("config.toml");
            jail.set_env("ASCIIGEN_BANNER__FONT", "block");
            jail.set_env("ASCIIGEN_BANNER__PADDING", "3");

            let config = Config::load_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.banner.font, "block");
            assert_eq!(config.banner.border, Some('*'));
            assert_eq!(config.banner.padding, 3);
            Ok(())
        });
    }
}
