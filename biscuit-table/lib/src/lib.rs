//! # biscuit-table
//!
//! Fixed-width, column-aligned text tables for the terminal.
//!
//! - **Word wrapping**: cells wider than their column wrap at word
//!   boundaries, and every row grows to the height of its tallest cell
//! - **Styling**: rows, columns and individual cells can each carry a
//!   formatter; a cell's style is resolved row → column → cell, with later
//!   sources winning per channel
//! - **Views**: rows by (negative) index, columns by index or header text
//!
//! ## Quick Start
//!
//! ```
//! use biscuit_table::{CellColor, OutputMode, RenderOptions, Table, color::Color};
//!
//! let mut table = Table::new(vec![
//!     vec!["Num", "Letters", "Description"],
//!     vec!["1", "aaa", "first row"],
//!     vec!["20", "bb", "second row"],
//! ])?;
//!
//! table.set_column_formatter("Description", |cell, _col, _row| {
//!     if cell.text().contains("row") {
//!         CellColor::new(Some(Color::Red), Some(Color::Blue))
//!     } else {
//!         CellColor::unset()
//!     }
//! })?;
//!
//! let plain = table.render()?;
//! assert_eq!(plain.lines().next(), Some("Num | Letters | Description"));
//!
//! let styled = table.render_with(&RenderOptions::new().with_output(OutputMode::Ansi))?;
//! assert!(styled.contains("\x1b[31m"));
//! # Ok::<(), biscuit_table::TableError>(())
//! ```
//!
//! ## Modules
//!
//! - [`table`] - the `Table` which owns the grid
//! - [`cell`] - a single value and its width/wrapping rules
//! - [`row`] / [`column`] - views over the grid
//! - [`style`] - `CellColor` overrides and their resolution
//! - [`color`] - the color palette
//! - [`layout`] - column widths, row padding and joining
//! - [`options`] - render settings
//! - [`eval`] - escape-code-aware measurement

pub mod cell;
pub mod color;
pub mod column;
pub mod error;
pub mod eval;
pub mod layout;
pub mod options;
pub mod row;
pub mod style;
pub mod table;

pub use cell::Cell;
pub use column::{Column, ColumnKey, ColumnView};
pub use error::TableError;
pub use options::{OutputMode, RenderOptions};
pub use row::{Row, RowView};
pub use style::{CellColor, Formatter, resolve_style};
pub use table::Table;
