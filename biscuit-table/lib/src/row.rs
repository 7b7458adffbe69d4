use std::slice;

use crate::{
    cell::Cell,
    column::Column,
    style::{CellColor, Formatter},
};

/// Maps an index onto a position within `len` items; negative values count
/// from the end.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (position < len).then_some(position)
}

/// A **Row** is a fixed-length sequence of cells plus an optional style
/// formatter which applies to every cell in it.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<Cell>,
    formatter: Option<Formatter>,
}

impl Row {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Row {
            cells,
            formatter: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<&Cell> {
        resolve_index(index, self.cells.len()).map(|i| &self.cells[i])
    }

    /// Mutable access to a cell, for attaching a formatter.
    pub fn get_mut(&mut self, index: isize) -> Option<&mut Cell> {
        resolve_index(index, self.cells.len()).map(|i| &mut self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Each cell's text, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(Cell::text).collect()
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    /// Attaches a style formatter to the row; it has the lowest precedence.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(&Cell, &Column<'_>, &Row) -> CellColor + 'static,
    {
        self.formatter = Some(Formatter::new(formatter));
    }

    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }
}

impl std::ops::Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Rows compare by their cells' text only.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<T: AsRef<str>> PartialEq<[T]> for Row {
    fn eq(&self, other: &[T]) -> bool {
        self.cells.len() == other.len()
            && self
                .cells
                .iter()
                .zip(other)
                .all(|(cell, value)| cell.text() == value.as_ref())
    }
}

impl<T: AsRef<str>> PartialEq<Vec<T>> for Row {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

/// A read-only, indexable view over a table's data rows (the header is not
/// included).
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    rows: &'a [Row],
}

impl<'a> RowView<'a> {
    pub(crate) fn new(rows: &'a [Row]) -> Self {
        RowView { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<&'a Row> {
        resolve_index(index, self.rows.len()).map(|i| &self.rows[i])
    }

    pub fn iter(&self) -> slice::Iter<'a, Row> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for RowView<'a> {
    type Item = &'a Row;
    type IntoIter = slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
