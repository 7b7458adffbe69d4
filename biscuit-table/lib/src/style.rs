//! Style overrides and how they are resolved for a single cell.
//!
//! A [`Row`], a [`Column`] and a [`Cell`] can each carry a [`Formatter`].
//! When a cell is rendered its style is built up from those three sources in
//! order of increasing precedence:
//!
//! 1. the row formatter
//! 2. the column formatter
//! 3. the cell formatter
//!
//! A channel set by a later source replaces whatever an earlier source set;
//! a channel left unset keeps the earlier value.

use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{
    cell::Cell,
    color::{Color, RESET},
    column::Column,
    row::Row,
};

/// A foreground/background override.
///
/// `None` means "no opinion" and defers to a lower-precedence source; a
/// channel still unset after resolution produces no escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellColor {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellColor {
    pub const fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        CellColor { fg, bg }
    }

    /// Sets only the foreground.
    pub const fn fg(color: Color) -> Self {
        CellColor {
            fg: Some(color),
            bg: None,
        }
    }

    /// Sets only the background.
    pub const fn bg(color: Color) -> Self {
        CellColor {
            fg: None,
            bg: Some(color),
        }
    }

    /// Both channels unset.
    pub const fn unset() -> Self {
        CellColor { fg: None, bg: None }
    }

    pub const fn is_unset(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    /// Layers `over` on top of `self`: each channel `over` sets wins.
    pub fn merge(self, over: CellColor) -> CellColor {
        CellColor {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
        }
    }

    /// Wraps `text` in this style's escape sequences.
    ///
    /// When neither channel produces a sequence the text is returned as is,
    /// otherwise a reset follows the text so the style cannot bleed into the
    /// delimiter.
    ///
    /// ## Examples
    ///
    /// ```
    /// use biscuit_table::{CellColor, color::Color};
    ///
    /// let style = CellColor::new(Some(Color::Red), Some(Color::Blue));
    /// assert_eq!(style.paint("hi"), "\x1b[31m\x1b[44mhi\x1b[0m");
    /// assert_eq!(CellColor::unset().paint("hi"), "hi");
    /// ```
    pub fn paint(&self, text: &str) -> String {
        let prefix = format!(
            "{}{}",
            self.fg.map(Color::fg_code).unwrap_or_default(),
            self.bg.map(Color::bg_code).unwrap_or_default()
        );

        if prefix.is_empty() {
            text.to_string()
        } else {
            format!("{prefix}{text}{RESET}")
        }
    }
}

/// The signature shared by row, column and cell style sources.
type FormatFn = dyn Fn(&Cell, &Column<'_>, &Row) -> CellColor;

/// A style source: called with the cell being rendered, its column and its
/// row, it returns the override that source wants to apply.
#[derive(Clone)]
pub struct Formatter(Rc<FormatFn>);

impl Formatter {
    pub fn new<F>(formatter: F) -> Self
    where
        F: Fn(&Cell, &Column<'_>, &Row) -> CellColor + 'static,
    {
        Formatter(Rc::new(formatter))
    }

    pub fn apply(&self, cell: &Cell, column: &Column<'_>, row: &Row) -> CellColor {
        (self.0)(cell, column, row)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// Resolves the effective style of `cell`, which sits in `column` and `row`.
///
/// Nothing is mutated, so the result can be re-derived at any time.
pub fn resolve_style(cell: &Cell, column: &Column<'_>, row: &Row) -> CellColor {
    [row.formatter(), column.formatter(), cell.formatter()]
        .into_iter()
        .flatten()
        .fold(CellColor::unset(), |style, formatter| {
            style.merge(formatter.apply(cell, column, row))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn sample() -> Table {
        Table::new(vec![
            vec!["Id", "Name", "Location", "Still Around?"],
            vec!["1", "Library Of Alexandria", "Egypt", "No"],
            vec!["33", "Eifle Tower", "Paris", "Yes"],
            vec!["66", "Big Ben", "London", "Yes"],
        ])
        .unwrap()
    }

    fn style_at(table: &Table, row: isize, col: isize) -> CellColor {
        let row = table.row(row).unwrap();
        let column = table.cols().by_index(col).unwrap();
        let cell = row.get(col).unwrap();
        resolve_style(cell, &column, row)
    }

    #[test]
    fn test_merge_replaces_only_set_channels() {
        let base = CellColor::new(Some(Color::Red), None);
        assert_eq!(
            base.merge(CellColor::bg(Color::Blue)),
            CellColor::new(Some(Color::Red), Some(Color::Blue))
        );
        assert_eq!(
            base.merge(CellColor::fg(Color::Green)),
            CellColor::fg(Color::Green)
        );
        assert_eq!(base.merge(CellColor::unset()), base);
    }

    #[test]
    fn test_paint_special_tokens() {
        assert_eq!(CellColor::fg(Color::NoColor).paint("x"), "x");
        assert_eq!(CellColor::fg(Color::Reset).paint("x"), "\x1b[0mx\x1b[0m");
        assert_eq!(CellColor::bg(Color::Green).paint("x"), "\x1b[42mx\x1b[0m");
    }

    #[test]
    fn test_no_formatters_resolves_unset() {
        let table = sample();
        assert!(style_at(&table, 0, 0).is_unset());
    }

    #[test]
    fn test_cell_formatter() {
        let mut table = sample();
        table
            .cell_mut(-1, -1)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::new(Some(Color::Green), Some(Color::NoColor)));

        assert_eq!(
            style_at(&table, -1, -1),
            CellColor::new(Some(Color::Green), Some(Color::NoColor))
        );
        assert!(style_at(&table, -1, 0).is_unset());
    }

    #[test]
    fn test_column_formatter_applies_to_each_cell() {
        let mut table = sample();
        table
            .set_column_formatter("Still Around?", |_, _, _| CellColor::fg(Color::Blue))
            .unwrap();

        for row in 0..3 {
            assert_eq!(style_at(&table, row, -1), CellColor::fg(Color::Blue));
            assert!(style_at(&table, row, 0).is_unset());
        }
    }

    #[test]
    fn test_row_formatter_applies_to_each_cell() {
        let mut table = sample();
        table
            .row_mut(1)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::fg(Color::Yellow));

        for col in 0..4 {
            assert_eq!(style_at(&table, 1, col), CellColor::fg(Color::Yellow));
            assert!(style_at(&table, 0, col).is_unset());
        }
    }

    #[test]
    fn test_formatter_precedence() {
        let mut table = sample();
        table
            .row_mut(0)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::fg(Color::Red));
        table
            .set_column_formatter(1, |_, _, _| CellColor::bg(Color::Blue))
            .unwrap();

        assert_eq!(
            style_at(&table, 0, 1),
            CellColor::new(Some(Color::Red), Some(Color::Blue))
        );

        table
            .cell_mut(0, 1)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::fg(Color::Green));
        assert_eq!(
            style_at(&table, 0, 1),
            CellColor::new(Some(Color::Green), Some(Color::Blue))
        );

        // column beats row on the same channel
        table
            .set_column_formatter(1, |_, _, _| CellColor::fg(Color::Cyan))
            .unwrap();
        assert_eq!(style_at(&table, 0, 2), CellColor::fg(Color::Red));
        assert_eq!(style_at(&table, 1, 1), CellColor::fg(Color::Cyan));
    }

    #[test]
    fn test_formatter_receives_cell_column_and_row() {
        let mut table = sample();
        table
            .set_column_formatter("Name", |cell, column, row| {
                let is_tower = cell.text().contains("Tower");
                let named = column.header() == "Name";
                let second = row.get(0).is_some_and(|id| id == "33");
                if is_tower && named && second {
                    CellColor::fg(Color::Magenta)
                } else {
                    CellColor::unset()
                }
            })
            .unwrap();

        assert_eq!(style_at(&table, 1, 1), CellColor::fg(Color::Magenta));
        assert!(style_at(&table, 0, 1).is_unset());
    }

    #[test]
    fn test_resolution_does_not_consume_formatters() {
        let mut table = sample();
        table
            .cell_mut(0, 0)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::fg(Color::Red));
        let first = style_at(&table, 0, 0);
        let second = style_at(&table, 0, 0);
        assert_eq!(first, second);
        assert!(table.cell(0, 0).unwrap().formatter().is_some());
    }
}
