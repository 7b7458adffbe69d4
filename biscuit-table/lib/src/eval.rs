//! Escape-code-aware measurement of rendered table text.
//!
//! Layout always measures raw cell text, so these helpers are for checking
//! styled output after the fact: stripping the SGR sequences must leave the
//! plain rendering behind.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Matches CSI sequences (which include SGR color codes) and OSC sequences.
static ANSI_ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\x1b\[[\x30-\x3f]*[\x20-\x2f]*[\x40-\x7e]", // CSI sequences
        r"|\x1b\].*?(?:\x07|\x1b\\)",                  // OSC sequences (BEL or ST terminator)
    ))
    .expect("Invalid ANSI escape regex")
});

/// Removes every ANSI escape sequence from `text`.
///
/// ## Examples
///
/// ```
/// use biscuit_table::eval::strip_escape_codes;
///
/// assert_eq!(strip_escape_codes("\x1b[31m\x1b[44mred\x1b[0m | x"), "red | x");
/// ```
pub fn strip_escape_codes(text: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Whether `text` contains any ANSI escape sequence.
pub fn has_escape_codes(text: &str) -> bool {
    ANSI_ESCAPE_RE.is_match(text)
}

/// The width `text` occupies on screen once escape sequences are removed.
pub fn visible_width(text: &str) -> usize {
    strip_escape_codes(text).width()
}

/// The visible width of each line of `text`. Empty text is one line of
/// width zero.
///
/// ```
/// use biscuit_table::eval::line_widths;
///
/// assert_eq!(line_widths("\x1b[32mab\x1b[0m\nabcd"), vec![2, 4]);
/// assert_eq!(line_widths(""), vec![0]);
/// ```
pub fn line_widths(text: &str) -> Vec<usize> {
    let stripped = strip_escape_codes(text);
    if stripped.is_empty() {
        return vec![0];
    }
    stripped.lines().map(UnicodeWidthStr::width).collect()
}
