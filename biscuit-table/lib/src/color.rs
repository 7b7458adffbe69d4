//! The closed color palette used for cell styling.
//!
//! Each [`Color`] maps to a foreground and a background SGR sequence. Two
//! tokens are special:
//!
//! - [`Color::Reset`] emits the SGR reset sequence (`\x1b[0m`)
//! - [`Color::NoColor`] emits nothing at all
//!
//! Both differ from leaving a channel unset (`None` in a
//! [`CellColor`](crate::style::CellColor)), which means "no opinion".

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Resets every SGR attribute.
pub const RESET: &str = "\x1b[0m";

/// Basic 8 color mode (ANSI colors 0-7 and bright variants 8-15) plus the
/// explicit reset and empty tokens.
///
/// ## Examples
///
/// ```
/// use biscuit_table::color::Color;
///
/// assert_eq!(Color::Red.fg_code(), "\x1b[31m");
/// assert_eq!(Color::BrightBlue.bg_code(), "\x1b[104m");
/// assert_eq!("bright-red".parse::<Color>().unwrap(), Color::BrightRed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Emits the SGR reset sequence.
    Reset,
    /// Emits an empty sequence.
    #[serde(rename = "none")]
    NoColor,
}

impl Color {
    /// Every palette entry, in SGR order.
    pub const ALL: [Color; 18] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
        Color::Reset,
        Color::NoColor,
    ];

    /// The kebab-case name used when parsing and displaying.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
            Color::Reset => "reset",
            Color::NoColor => "none",
        }
    }

    /// The foreground SGR parameter, `None` for the two special tokens.
    const fn fg_param(self) -> Option<u8> {
        match self {
            Color::Black => Some(30),
            Color::Red => Some(31),
            Color::Green => Some(32),
            Color::Yellow => Some(33),
            Color::Blue => Some(34),
            Color::Magenta => Some(35),
            Color::Cyan => Some(36),
            Color::White => Some(37),
            Color::BrightBlack => Some(90),
            Color::BrightRed => Some(91),
            Color::BrightGreen => Some(92),
            Color::BrightYellow => Some(93),
            Color::BrightBlue => Some(94),
            Color::BrightMagenta => Some(95),
            Color::BrightCyan => Some(96),
            Color::BrightWhite => Some(97),
            Color::Reset | Color::NoColor => None,
        }
    }

    /// Escape sequence that sets this color as the text color.
    pub fn fg_code(self) -> String {
        match (self, self.fg_param()) {
            (Color::Reset, _) => RESET.to_string(),
            (_, Some(param)) => sgr(param),
            (_, None) => String::new(),
        }
    }

    /// Escape sequence that sets this color as the background color.
    ///
    /// Background parameters sit ten above their foreground counterparts.
    pub fn bg_code(self) -> String {
        match (self, self.fg_param()) {
            (Color::Reset, _) => RESET.to_string(),
            (_, Some(param)) => sgr(param + 10),
            (_, None) => String::new(),
        }
    }
}

fn sgr(param: u8) -> String {
    format!("\x1b[{}m", param)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = TableError;

    /// Parses a palette name, case-insensitively. Underscores and spaces are
    /// accepted in place of dashes (`bright_red`, `Bright Red`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Color::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
            .ok_or_else(|| TableError::UnknownColor(s.to_string()))
    }
}
