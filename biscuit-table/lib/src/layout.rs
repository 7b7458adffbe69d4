//! Turns a table into aligned lines of text.
//!
//! Layout works in three steps:
//!
//! 1. every column gets one fixed width, derived from the raw (unstyled)
//!    text of its header and data cells
//! 2. each row (header first) is wrapped cell by cell, and shorter cells are
//!    padded with blank lines until all cells in the row are equally tall
//! 3. line `i` of every cell is joined with [`COLUMN_DELIMITER`]
//!
//! Styling happens between steps 2 and 3 and never changes a width.

use crate::{
    cell::pad_line,
    column::Column,
    error::TableError,
    options::RenderOptions,
    row::Row,
    style::resolve_style,
    table::Table,
};

/// Placed between the cells of a line.
pub const COLUMN_DELIMITER: &str = " | ";

/// Appends blank lines (`width` copies of `fill`) until `texts` holds `rows`
/// lines. Lists already that long are returned unchanged.
///
/// ## Examples
///
/// ```
/// use biscuit_table::layout::pad_text_list;
///
/// let padded = pad_text_list(vec!["ab".to_string()], 3, 2, '-');
/// assert_eq!(padded, vec!["ab", "--", "--"]);
/// ```
pub fn pad_text_list(mut texts: Vec<String>, rows: usize, width: usize, fill: char) -> Vec<String> {
    if texts.len() < rows {
        let blank = pad_line("", width, fill);
        texts.resize(rows, blank);
    }
    texts
}

/// Joins per-column line lists into output lines: line `i` of the result is
/// line `i` of every column, separated by [`COLUMN_DELIMITER`].
///
/// ## Errors
///
/// Every column must hold the same number of lines. A mismatch is reported as
/// [`TableError::RaggedRow`]; nothing is truncated or padded here.
pub fn join_table_row<S: AsRef<str>>(columns: &[Vec<S>]) -> Result<Vec<String>, TableError> {
    let Some(first) = columns.first() else {
        return Ok(Vec::new());
    };
    let height = first.len();

    if let Some((column, lines)) = columns
        .iter()
        .enumerate()
        .find(|(_, lines)| lines.len() != height)
    {
        tracing::error!(column, expected = height, found = lines.len(), "Ragged row reached join");
        return Err(TableError::RaggedRow {
            column,
            expected: height,
            found: lines.len(),
        });
    }

    Ok((0..height)
        .map(|line| {
            columns
                .iter()
                .map(|lines| lines[line].as_ref())
                .collect::<Vec<&str>>()
                .join(COLUMN_DELIMITER)
        })
        .collect())
}

/// Computes the display width of every column.
///
/// Without limits a column is as wide as its widest single-line cell, header
/// included. `max_column_width` wraps each column at that width, and
/// `max_width` narrows the widest columns until the whole table fits. Neither
/// limit pushes a column below its longest word.
pub fn column_widths(columns: &[Column<'_>], options: &RenderOptions) -> Vec<usize> {
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|column| match options.max_column_width {
            Some(limit) => widest(column, limit),
            None => column.max_width(),
        })
        .collect();

    if let Some(total) = options.max_width {
        let floors: Vec<usize> = columns.iter().map(Column::min_width).collect();
        let delimiters = COLUMN_DELIMITER.len() * columns.len().saturating_sub(1);
        let mut current = widths.iter().sum::<usize>() + delimiters;
        let mut narrowed = false;

        while current > total {
            let Some(target) = widths
                .iter()
                .enumerate()
                .filter(|(i, width)| **width > floors[*i])
                .max_by_key(|(_, width)| **width)
                .map(|(i, _)| i)
            else {
                tracing::debug!(current, total, "Every column is at its minimum width");
                break;
            };
            widths[target] -= 1;
            current -= 1;
            narrowed = true;
        }

        if narrowed {
            widths = columns
                .iter()
                .zip(&widths)
                .map(|(column, width)| widest(column, *width))
                .collect();
        }
    }

    widths
}

fn widest(column: &Column<'_>, width: usize) -> usize {
    column.display_widths(width).into_iter().max().unwrap_or(0)
}

/// Renders one row into as many lines as its tallest cell needs.
pub fn render_row(
    row: &Row,
    columns: &[Column<'_>],
    widths: &[usize],
    options: &RenderOptions,
) -> Result<Vec<String>, TableError> {
    let wrapped: Vec<Vec<String>> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| cell.wrap_to_width_with_fill(*width, options.fill))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0);

    let padded = wrapped
        .into_iter()
        .zip(widths)
        .map(|(lines, width)| pad_text_list(lines, height, *width, options.fill));

    let blocks: Vec<Vec<String>> = if options.is_styled() {
        padded
            .zip(row.iter().zip(columns))
            .map(|(lines, (cell, column))| {
                let style = resolve_style(cell, column, row);
                lines.iter().map(|line| style.paint(line)).collect()
            })
            .collect()
    } else {
        padded.collect()
    };

    join_table_row(&blocks)
}

/// Renders the header and every data row, one line per wrapped line.
#[tracing::instrument(skip(table), fields(rows = table.len(), columns = table.column_count()))]
pub fn render(table: &Table, options: &RenderOptions) -> Result<String, TableError> {
    let columns: Vec<Column<'_>> = table.cols().iter().collect();
    let widths = column_widths(&columns, options);
    tracing::debug!(?widths, "Computed column widths");

    let mut lines = Vec::new();
    for row in std::iter::once(table.header()).chain(table.rows()) {
        let block = render_row(row, &columns, &widths, options)?;
        tracing::trace!(lines = block.len(), "Rendered row");
        lines.extend(block);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::Color,
        eval::strip_escape_codes,
        options::OutputMode,
        style::CellColor,
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_pad_text_list_nothing_needed() {
        let starting = strings(&["12345", "67890"]);
        assert_eq!(pad_text_list(starting.clone(), 2, 5, ' '), starting);
        assert_eq!(pad_text_list(starting.clone(), 1, 5, ' '), starting);
    }

    #[test]
    fn test_pad_text_list_add_rows() {
        for fill in [' ', '-', '='] {
            let starting = strings(&["12345", "67890"]);
            let expected_padding = fill.to_string().repeat(5);
            let result = pad_text_list(starting.clone(), 4, 5, fill);
            assert_eq!(result[0], starting[0]);
            assert_eq!(result[1], starting[1]);
            assert_eq!(result[2], expected_padding);
            assert_eq!(result[3], expected_padding);
        }
    }

    #[test]
    fn test_join_table_row() {
        let inputs = vec![
            strings(&["Cell", "One ", "Text"]),
            strings(&["Second", "Text  ", "      "]),
        ];
        let expected = vec!["Cell | Second", "One  | Text  ", "Text |       "];
        assert_eq!(join_table_row(&inputs).unwrap(), expected);
    }

    #[test]
    fn test_join_table_row_mismatched_sizes() {
        let inputs = vec![
            strings(&["Has  ", "Three ", "Lines"]),
            strings(&["Just", "Two "]),
        ];
        assert_eq!(
            join_table_row(&inputs),
            Err(TableError::RaggedRow {
                column: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_join_table_row_empty() {
        let inputs: Vec<Vec<String>> = Vec::new();
        assert!(join_table_row(&inputs).unwrap().is_empty());
    }

    #[test]
    fn test_render_no_wrap() {
        let table = Table::new(vec![vec!["Id", "Name"], vec!["1", "Alexandria"]]).unwrap();
        let text = render(&table, &RenderOptions::default()).unwrap();
        assert_eq!(text, "Id | Name      \n1  | Alexandria");
    }

    #[test]
    fn test_render_wrapped_column() {
        let table = Table::with_header(vec!["H"], vec![vec!["This line is 15"]]).unwrap();
        let options = RenderOptions::new().with_max_column_width(4);
        let text = render(&table, &options).unwrap();
        assert_eq!(text, "H   \nThis\nline\nis  \n15  ");
    }

    #[test]
    fn test_short_cells_are_padded_to_row_height() {
        let table = Table::with_header(
            vec!["Num", "Description"],
            vec![vec!["1", "first row of text"]],
        )
        .unwrap();
        let options = RenderOptions::new().with_max_column_width(11);
        let text = render(&table, &options).unwrap();
        let expected = [
            "Num | Description",
            "1   | first row  ",
            "    | of text    ",
        ];
        assert_eq!(text, expected.join("\n"));
    }

    #[test]
    fn test_fill_character_pads_cells_and_blank_lines() {
        let table = Table::with_header(vec!["a", "bb"], vec![vec!["x y", "z"]]).unwrap();
        let options = RenderOptions::new().with_fill('.').with_max_column_width(1);
        let text = render(&table, &options).unwrap();
        assert_eq!(text, "a | bb\nx | z.\ny | ..");
    }

    #[test]
    fn test_limit_below_longest_word_keeps_words_whole() {
        let table = Table::with_header(vec!["Word"], vec![vec!["Alexandria"]]).unwrap();
        let options = RenderOptions::new().with_max_column_width(3);
        let text = render(&table, &options).unwrap();
        assert_eq!(text, "Word      \nAlexandria");
    }

    #[test]
    fn test_max_width_narrows_widest_column() {
        let table = Table::new(vec![
            vec!["Id", "Description"],
            vec!["1", "a fairly long description"],
        ])
        .unwrap();
        let columns: Vec<Column<'_>> = table.cols().iter().collect();

        // 2 + 3 + 25 = 30 without a cap
        assert_eq!(column_widths(&columns, &RenderOptions::default()), vec![2, 25]);

        let options = RenderOptions::new().with_max_width(20);
        let widths = column_widths(&columns, &options);
        assert_eq!(widths[0], 2);
        assert!(widths[0] + COLUMN_DELIMITER.len() + widths[1] <= 20);

        let text = render(&table, &options).unwrap();
        assert!(text.lines().all(|line| line.len() <= 20));
    }

    #[test]
    fn test_max_width_stops_at_minimum_widths() {
        let table = Table::new(vec![vec!["Identifier", "Name"], vec!["1", "Alexandria"]]).unwrap();
        let columns: Vec<Column<'_>> = table.cols().iter().collect();
        let widths = column_widths(&columns, &RenderOptions::new().with_max_width(5));
        assert_eq!(widths, vec![10, 10]);
    }

    #[test]
    fn test_render_row_styles_each_line() {
        let mut table = Table::with_header(vec!["H"], vec![vec!["a b"]]).unwrap();
        table
            .row_mut(0)
            .unwrap()
            .set_formatter(|_, _, _| CellColor::fg(Color::Red));
        let columns: Vec<Column<'_>> = table.cols().iter().collect();
        let options = RenderOptions::new().with_output(OutputMode::Ansi);

        let lines = render_row(table.row(0).unwrap(), &columns, &[1], &options).unwrap();
        assert_eq!(lines, vec!["\x1b[31ma\x1b[0m", "\x1b[31mb\x1b[0m"]);
    }

    #[test]
    fn test_plain_output_ignores_formatters() {
        let mut table = Table::new(vec![vec!["Id", "Name"], vec!["1", "Alexandria"]]).unwrap();
        table
            .set_column_formatter(0, |_, _, _| CellColor::fg(Color::Red))
            .unwrap();
        let text = render(&table, &RenderOptions::default()).unwrap();
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_color_formatting_does_not_impact_cell_width() {
        let mut table = Table::new(vec![
            vec!["Num", "Letters", "Description"],
            vec!["1", "aaa", "first row"],
            vec!["20", "bb", "second row"],
            vec!["300", "c", "third row"],
        ])
        .unwrap();
        table
            .set_column_formatter("Description", |cell, _, _| {
                if cell.text().contains("row") {
                    CellColor::new(Some(Color::Red), Some(Color::Blue))
                } else {
                    CellColor::unset()
                }
            })
            .unwrap();

        let plain = render(&table, &RenderOptions::default()).unwrap();
        let styled = render(&table, &RenderOptions::new().with_output(OutputMode::Ansi)).unwrap();

        assert_ne!(plain, styled);
        assert_eq!(strip_escape_codes(&styled), plain);
        assert!(styled.contains("\x1b[31m\x1b[44mfirst row  \x1b[0m"));
        // the header cell has no "row" in it, so it stays plain
        assert!(styled.starts_with("Num | Letters | Description"));
    }
}
