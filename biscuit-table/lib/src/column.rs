use crate::{
    cell::Cell,
    error::TableError,
    row::{Row, resolve_index},
    style::Formatter,
};

/// How a column is addressed: by position or by header text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Zero-based position; negative values count from the end.
    Index(isize),
    /// Exact match against the header cell's text.
    Name(String),
}

impl From<isize> for ColumnKey {
    fn from(index: isize) -> Self {
        ColumnKey::Index(index)
    }
}

impl From<i32> for ColumnKey {
    fn from(index: i32) -> Self {
        ColumnKey::Index(index as isize)
    }
}

impl From<usize> for ColumnKey {
    fn from(index: usize) -> Self {
        ColumnKey::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        ColumnKey::Name(name.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(name: String) -> Self {
        ColumnKey::Name(name)
    }
}

impl From<&String> for ColumnKey {
    fn from(name: &String) -> Self {
        ColumnKey::Name(name.clone())
    }
}

/// A **Column** is a read-only projection of the cells found at one position
/// in every data row, together with the header cell at that position.
///
/// The header takes part in width calculations but not in iteration or
/// equality.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    index: usize,
    header: &'a Cell,
    rows: &'a [Row],
    formatter: Option<&'a Formatter>,
}

impl<'a> Column<'a> {
    /// The column's zero-based position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn header(&self) -> &'a Cell {
        self.header
    }

    /// Number of data cells (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The data cell in row `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Option<&'a Cell> {
        resolve_index(index, self.rows.len()).map(|i| &self.rows[i][self.index])
    }

    /// Iterates over the data cells, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let index = self.index;
        self.rows.iter().map(move |row| &row[index])
    }

    pub fn formatter(&self) -> Option<&'a Formatter> {
        self.formatter
    }

    /// The single-line width of every cell; the header's width comes first.
    pub fn cell_widths(&self) -> Vec<usize> {
        std::iter::once(self.header)
            .chain(self.iter())
            .map(Cell::width)
            .collect()
    }

    /// The width of every cell once wrapped to `width`; header first.
    pub fn display_widths(&self, width: usize) -> Vec<usize> {
        std::iter::once(self.header)
            .chain(self.iter())
            .map(|cell| cell.display_width(width))
            .collect()
    }

    /// The narrowest this column can get without a word overflowing.
    pub fn min_width(&self) -> usize {
        std::iter::once(self.header)
            .chain(self.iter())
            .map(Cell::min_width)
            .max()
            .unwrap_or(0)
    }

    /// The widest single-line cell, header included.
    pub fn max_width(&self) -> usize {
        self.cell_widths().into_iter().max().unwrap_or(0)
    }
}

/// Columns compare by their data cells only.
impl PartialEq for Column<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: AsRef<str>> PartialEq<[T]> for Column<'_> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(cell, value)| cell.text() == value.as_ref())
    }
}

impl<T: AsRef<str>> PartialEq<Vec<T>> for Column<'_> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

/// A view for looking up the columns of a table by position or header text.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    header: &'a Row,
    rows: &'a [Row],
    formatters: &'a [Option<Formatter>],
}

impl<'a> ColumnView<'a> {
    pub(crate) fn new(
        header: &'a Row,
        rows: &'a [Row],
        formatters: &'a [Option<Formatter>],
    ) -> Self {
        ColumnView {
            header,
            rows,
            formatters,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    fn column(&self, index: usize) -> Column<'a> {
        Column {
            index,
            header: &self.header[index],
            rows: self.rows,
            formatter: self.formatters.get(index).and_then(Option::as_ref),
        }
    }

    /// Looks a column up by position; negative indices count from the end.
    pub fn by_index(&self, index: isize) -> Result<Column<'a>, TableError> {
        resolve_index(index, self.len())
            .map(|i| self.column(i))
            .ok_or(TableError::ColumnOutOfRange {
                index,
                columns: self.len(),
            })
    }

    /// Looks a column up by its header text.
    ///
    /// When several headers share the same text the first one wins.
    pub fn by_name(&self, name: &str) -> Result<Column<'a>, TableError> {
        self.position(name)
            .map(|i| self.column(i))
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Looks a column up by either position or header text.
    ///
    /// ## Examples
    ///
    /// ```
    /// use biscuit_table::Table;
    ///
    /// let table = Table::new(vec![vec!["Id", "Name"], vec!["1", "Alexandria"]]).unwrap();
    /// let cols = table.cols();
    /// assert_eq!(cols.get("Name").unwrap(), cols.get(1).unwrap());
    /// assert_eq!(cols.get(-1).unwrap(), vec!["Alexandria"]);
    /// assert!(cols.get("Missing").is_err());
    /// ```
    pub fn get<K: Into<ColumnKey>>(&self, key: K) -> Result<Column<'a>, TableError> {
        match key.into() {
            ColumnKey::Index(index) => self.by_index(index),
            ColumnKey::Name(name) => self.by_name(&name),
        }
    }

    /// Resolves a key to a column position without building the column.
    pub fn position_of(&self, key: &ColumnKey) -> Result<usize, TableError> {
        match key {
            ColumnKey::Index(index) => {
                resolve_index(*index, self.len()).ok_or(TableError::ColumnOutOfRange {
                    index: *index,
                    columns: self.len(),
                })
            }
            ColumnKey::Name(name) => self
                .position(name)
                .ok_or_else(|| TableError::UnknownColumn(name.clone())),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|cell| cell.text() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = Column<'a>> + use<'a> {
        let view = *self;
        (0..self.len()).map(move |i| view.column(i))
    }
}
