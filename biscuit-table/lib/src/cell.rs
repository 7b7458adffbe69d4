use std::{borrow::Cow, fmt};

use textwrap::{Options as WrapOptions, WordSeparator, WordSplitter, WrapAlgorithm, wrap};
use unicode_width::UnicodeWidthStr;

use crate::{
    column::Column,
    row::Row,
    style::{CellColor, Formatter},
};

/// A **Cell** holds one value of a table, converted to text when the cell
/// is created.
///
/// All width calculations are derived from that text on demand; nothing is
/// cached and the text never changes.
#[derive(Clone, Default)]
pub struct Cell {
    text: String,
    formatter: Option<Formatter>,
}

impl Cell {
    /// Creates a cell from anything with a textual representation.
    pub fn new<T: ToString + ?Sized>(value: &T) -> Self {
        Cell {
            text: value.to_string(),
            formatter: None,
        }
    }

    /// The cell's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How wide the text is with no wrapping at all.
    pub fn natural_width(&self) -> usize {
        self.text.width()
    }

    /// The smallest width which does not force a word to overflow, i.e. the
    /// width of the longest whitespace-delimited token.
    pub fn min_width(&self) -> usize {
        self.text
            .split_whitespace()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }

    /// The width needed to show the cell on a single line.
    ///
    /// Trailing whitespace is dropped by the wrapper, so this can be narrower
    /// than [`natural_width`](Self::natural_width). Leading whitespace is kept
    /// while the text fits on one line.
    pub fn width(&self) -> usize {
        self.display_width(self.natural_width())
    }

    /// The widest line produced when wrapping to `width`, never less than
    /// [`min_width`](Self::min_width).
    pub fn display_width(&self, width: usize) -> usize {
        self.text_lines(width)
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0)
            .max(self.min_width())
    }

    /// Wraps the text to `width` and pads every line with spaces to exactly
    /// `width` characters.
    ///
    /// Words are never split: a token longer than `width` gets a line of its
    /// own and overflows it.
    ///
    /// ## Examples
    ///
    /// ```
    /// use biscuit_table::Cell;
    ///
    /// let cell = Cell::new("This line is 15");
    /// assert_eq!(cell.wrap_to_width(10), vec!["This line ", "is 15     "]);
    /// assert_eq!(cell.wrap_to_width(4), vec!["This", "line", "is  ", "15  "]);
    /// ```
    pub fn wrap_to_width(&self, width: usize) -> Vec<String> {
        self.wrap_to_width_with_fill(width, ' ')
    }

    /// Same as [`wrap_to_width`](Self::wrap_to_width) but pads with `fill`.
    pub fn wrap_to_width_with_fill(&self, width: usize, fill: char) -> Vec<String> {
        self.text_lines(width)
            .into_iter()
            .map(|line| pad_line(&line, width, fill))
            .collect()
    }

    /// Greedy word wrap of the text, without padding. Always at least one line.
    fn text_lines(&self, width: usize) -> Vec<Cow<'_, str>> {
        if self.text.trim().is_empty() {
            return vec![Cow::Borrowed("")];
        }

        let options = WrapOptions::new(width.max(1))
            .break_words(false)
            .word_separator(WordSeparator::AsciiSpace)
            .word_splitter(WordSplitter::NoHyphenation)
            .wrap_algorithm(WrapAlgorithm::FirstFit);

        let mut lines: Vec<Cow<'_, str>> = if self.text.contains(|c: char| c.is_whitespace() && c != ' ') {
            // tabs and line breaks separate tokens like any other whitespace
            let spaced: String = self
                .text
                .chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .collect();
            wrap(&spaced, options)
                .into_iter()
                .map(|line| Cow::Owned(line.into_owned()))
                .collect()
        } else {
            wrap(&self.text, options)
        };

        // leading whitespace wraps as an empty first word; it never gets a line of its own
        if lines.len() > 1 && lines[0].trim().is_empty() {
            lines.remove(0);
        }
        lines
    }

    /// The style formatter attached to this cell, if any.
    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// Attaches a style formatter, replacing any previous one.
    ///
    /// A cell formatter has the highest precedence of the three style sources.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&Cell, &Column<'_>, &Row) -> CellColor + 'static,
    {
        self.formatter = Some(Formatter::new(formatter));
    }

    /// Removes the style formatter.
    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    /// Compares the cell's text with the textual form of any value.
    pub fn matches<T: fmt::Display + ?Sized>(&self, other: &T) -> bool {
        self.text == other.to_string()
    }
}

/// Pads `line` on the right with `fill` until it is `width` wide.
pub(crate) fn pad_line(line: &str, width: usize, fill: char) -> String {
    let padding = width.saturating_sub(line.width());
    let mut padded = String::with_capacity(line.len() + padding);
    padded.push_str(line);
    padded.extend(std::iter::repeat_n(fill, padding));
    padded
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("text", &self.text)
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Cell {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell {
            text,
            formatter: None,
        }
    }
}

/// Cells compare by text only; formatters are ignored.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Cell {}

impl PartialEq<str> for Cell {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Cell {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Cell {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}
