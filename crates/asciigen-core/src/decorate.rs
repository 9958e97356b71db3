//! Banner decoration: color wrapping and border framing
//!
//! Both steps work on the composed banner as a whole and know nothing about
//! fonts. Coloring wraps the entire block in one escape/reset pair, so the
//! border step has to measure lines with escape sequences removed.
//!
//! ```text
//! #######
//! #     #
//! # * * #
//! # * * #
//! # *** #
//! # * * #
//! # * * #
//! #     #
//! #######
//! ```

use crate::color::{Color, RESET};
use crate::error::Result;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Escape sequences excluded from width measurement:
/// - CSI: `ESC [`, parameter bytes `0-?`, intermediate bytes ` -/`, final byte `@-~`
/// - two-byte escapes: `ESC` followed by one of `@-Z` or `\-_`
static ANSI_ESCAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("Invalid ANSI escape regex")
});

/// Border padding used when none is configured
pub const DEFAULT_PADDING: usize = 1;

/// Largest padding honoured; larger values are clamped to it
pub const MAX_PADDING: usize = 256;

/// Remove ANSI escape sequences from a string
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    ANSI_ESCAPE_REGEX.replace_all(s, "")
}

/// Width of a line as shown in a terminal, in chars, ignoring escapes
pub fn visible_width(line: &str) -> usize {
    strip_ansi(line).chars().count()
}

/// Color a banner by color name. `None` leaves the banner untouched.
pub fn apply_color(banner: &str, color: Option<&str>) -> Result<String> {
    let Some(name) = color else {
        return Ok(banner.to_string());
    };
    let color: Color = name.parse()?;
    Ok(colorize(banner, color))
}

/// Wrap the whole banner in one color prefix and one reset suffix.
///
/// Blank banners are returned as-is.
pub fn colorize(banner: &str, color: Color) -> String {
    if banner.trim().is_empty() {
        return banner.to_string();
    }
    format!("{}{}{}", color.code(), banner, RESET)
}

/// Frame a banner with `border`, leaving `padding` blank columns and rows
/// between the frame and the content.
///
/// Lines keep any embedded escape codes; shorter lines are right-padded so
/// every row has the same visible width. `padding` is clamped to
/// [`MAX_PADDING`].
pub fn apply_border(banner: &str, border: char, padding: usize) -> String {
    if banner.trim().is_empty() {
        return banner.to_string();
    }
    let padding = padding.min(MAX_PADDING);

    let lines: Vec<&str> = banner.split('\n').collect();
    let widths: Vec<usize> = lines.iter().map(|line| visible_width(line)).collect();
    let max_width = widths.iter().copied().max().unwrap_or(0);
    if max_width == 0 {
        return banner.to_string();
    }

    let inner_width = max_width.saturating_add(2 * padding);
    let edge: String = std::iter::repeat(border)
        .take(inner_width.saturating_add(2))
        .collect();
    let blank = format!("{border}{}{border}", " ".repeat(inner_width));
    let left_pad = " ".repeat(padding);

    let mut framed = Vec::with_capacity(lines.len() + 2 * padding + 2);
    framed.push(edge.clone());
    framed.extend(std::iter::repeat(blank.clone()).take(padding));
    for (line, width) in lines.iter().zip(&widths) {
        let right_pad = " ".repeat(inner_width.saturating_sub(padding.saturating_add(*width)));
        framed.push(format!("{border}{left_pad}{line}{right_pad}{border}"));
    }
    framed.extend(std::iter::repeat(blank).take(padding));
    framed.push(edge);

    framed.join("\n")
}
