use std::fmt;

use crate::{
    cell::Cell,
    column::{Column, ColumnKey, ColumnView},
    error::TableError,
    layout,
    options::RenderOptions,
    row::{Row, RowView, resolve_index},
    style::{CellColor, Formatter},
};

/// A **Table** owns a header row and a grid of data rows, all of the same
/// length.
///
/// Values are converted to text as soon as the table is built. After that
/// only styling (formatters) and render options can change.
///
/// ## Examples
///
/// ```
/// use biscuit_table::Table;
///
/// let table = Table::new(vec![
///     vec!["Id", "Name"],
///     vec!["1", "Alexandria"],
/// ])
/// .unwrap();
///
/// assert_eq!(table.render().unwrap(), "Id | Name      \n1  | Alexandria");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
    column_formatters: Vec<Option<Formatter>>,
    options: RenderOptions,
}

impl Table {
    /// Builds a table whose first row is the header.
    ///
    /// ## Errors
    ///
    /// - [`TableError::MissingHeader`] when `data` has no rows
    /// - [`TableError::RowLength`] when a data row's length differs from the header's
    pub fn new<D, R, V>(data: D) -> Result<Table, TableError>
    where
        D: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: ToString,
    {
        let mut rows = data.into_iter();
        let header = rows.next().ok_or(TableError::MissingHeader)?;
        Table::with_header(header, rows)
    }

    /// Builds a table from an explicit header and data rows.
    ///
    /// ## Errors
    ///
    /// [`TableError::RowLength`] when a data row's length differs from the header's.
    pub fn with_header<H, HV, D, R, V>(header: H, data: D) -> Result<Table, TableError>
    where
        H: IntoIterator<Item = HV>,
        HV: ToString,
        D: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: ToString,
    {
        let header = Row::new(to_cells(header));
        let expected = header.len();

        let rows = data
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                let cells = to_cells(values);
                if cells.len() == expected {
                    Ok(Row::new(cells))
                } else {
                    Err(TableError::RowLength {
                        row,
                        expected,
                        found: cells.len(),
                    })
                }
            })
            .collect::<Result<Vec<Row>, TableError>>()?;

        tracing::debug!(rows = rows.len(), columns = expected, "Built table");

        Ok(Table {
            header,
            rows,
            column_formatters: vec![None; expected],
            options: RenderOptions::default(),
        })
    }

    /// Replaces the render options, builder style.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn header(&self) -> &Row {
        &self.header
    }

    /// Mutable access to the header row, for attaching formatters.
    pub fn header_mut(&mut self) -> &mut Row {
        &mut self.header
    }

    /// The header's text, in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.header.texts()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The data rows (header excluded).
    pub fn rows(&self) -> RowView<'_> {
        RowView::new(&self.rows)
    }

    /// The columns, addressable by position or header text.
    pub fn cols(&self) -> ColumnView<'_> {
        ColumnView::new(&self.header, &self.rows, &self.column_formatters)
    }

    /// Shorthand for `cols().get(key)`.
    pub fn col<K: Into<ColumnKey>>(&self, key: K) -> Result<Column<'_>, TableError> {
        self.cols().get(key)
    }

    /// The data row at `index`; negative indices count from the end.
    pub fn row(&self, index: isize) -> Option<&Row> {
        resolve_index(index, self.rows.len()).map(|i| &self.rows[i])
    }

    /// Mutable access to a data row, for attaching formatters.
    pub fn row_mut(&mut self, index: isize) -> Option<&mut Row> {
        resolve_index(index, self.rows.len()).map(|i| &mut self.rows[i])
    }

    pub fn cell(&self, row: isize, col: isize) -> Option<&Cell> {
        self.row(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: isize, col: isize) -> Option<&mut Cell> {
        self.row_mut(row)?.get_mut(col)
    }

    /// Attaches a formatter to every cell of a column (header included).
    ///
    /// ## Errors
    ///
    /// [`TableError::UnknownColumn`] or [`TableError::ColumnOutOfRange`] when
    /// the key matches no column.
    pub fn set_column_formatter<K, F>(&mut self, key: K, formatter: F) -> Result<(), TableError>
    where
        K: Into<ColumnKey>,
        F: Fn(&Cell, &Column<'_>, &Row) -> CellColor + 'static,
    {
        let position = self.cols().position_of(&key.into())?;
        self.column_formatters[position] = Some(Formatter::new(formatter));
        Ok(())
    }

    /// Attaches a formatter to a data row; negative indices count from the end.
    ///
    /// ## Errors
    ///
    /// [`TableError::RowOutOfRange`] when `index` matches no data row.
    pub fn set_row_formatter<F>(&mut self, index: isize, formatter: F) -> Result<(), TableError>
    where
        F: Fn(&Cell, &Column<'_>, &Row) -> CellColor + 'static,
    {
        let rows = self.rows.len();
        let row = self
            .row_mut(index)
            .ok_or(TableError::RowOutOfRange { index, rows })?;
        row.set_formatter(formatter);
        Ok(())
    }

    /// Removes a column's formatter.
    pub fn clear_column_formatter<K: Into<ColumnKey>>(&mut self, key: K) -> Result<(), TableError> {
        let position = self.cols().position_of(&key.into())?;
        self.column_formatters[position] = None;
        Ok(())
    }

    /// Column widths as the table's own options would lay them out.
    pub fn column_widths(&self) -> Vec<usize> {
        self.column_widths_with(&self.options)
    }

    pub fn column_widths_with(&self, options: &RenderOptions) -> Vec<usize> {
        let columns: Vec<Column<'_>> = self.cols().iter().collect();
        layout::column_widths(&columns, options)
    }

    /// Renders the table with its own options.
    ///
    /// ## Errors
    ///
    /// Only [`TableError::RaggedRow`], which indicates a layout defect.
    pub fn render(&self) -> Result<String, TableError> {
        layout::render(self, &self.options)
    }

    /// Renders the table with `options` instead of its own.
    pub fn render_with(&self, options: &RenderOptions) -> Result<String, TableError> {
        layout::render(self, options)
    }
}

fn to_cells<I, V>(values: I) -> Vec<Cell>
where
    I: IntoIterator<Item = V>,
    V: ToString,
{
    values.into_iter().map(|value| Cell::new(&value)).collect()
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
