//! Table rendering CLI.
//!
//! Renders delimited rows as a column-aligned table:
//! - Word wrapping under a per-column or total width cap
//! - Column, row and cell-level (highlight) coloring
//! - JSON output of the computed layout

use std::{io::IsTerminal, str::FromStr};

use biscuit_table::{
    CellColor, ColumnKey, OutputMode, RenderOptions, Table, TableError, color::Color,
};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Serialize;

/// Width used by `--fit` when the terminal size can't be detected.
const FALLBACK_WIDTH: usize = 120;

/// Aligned table renderer
#[derive(Parser, Debug)]
#[command(name = "btable")]
#[command(author, version, about = "Render delimited rows as an aligned terminal table")]
#[command(after_help = "\
EXAMPLES:
  btable 'Id,Name' '1,Library Of Alexandria' '33,Eifle Tower'
  btable --max-column-width 10 --column-color Name=red/blue 'Id,Name' '1,Library Of Alexandria'
  btable --header 'a|b' --separator '|' '1|2' '3|4'
  btable --row-color -1=green --highlight Yes=black/yellow 'Name,Open' 'Ben,Yes' 'Tower,No'
")]
struct Args {
    /// Rows of values; the first row is the header unless --header is given
    #[arg(value_name = "ROW", required = true)]
    rows: Vec<String>,

    /// Explicit header row
    #[arg(long, value_name = "ROW")]
    header: Option<String>,

    /// Separator between the values of a row
    #[arg(short, long, default_value = ",")]
    separator: String,

    /// Wrap any column wider than N characters
    #[arg(long, value_name = "N")]
    max_column_width: Option<usize>,

    /// Narrow the widest columns until the table fits in N characters
    #[arg(short, long, value_name = "N", conflicts_with = "fit")]
    width: Option<usize>,

    /// Narrow the table to fit the terminal
    #[arg(long)]
    fit: bool,

    /// Character used to pad cells
    #[arg(long, default_value_t = ' ')]
    fill: char,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Color a column, addressed by header text or position
    #[arg(long = "column-color", value_name = "COLUMN=FG[/BG]")]
    column_colors: Vec<String>,

    /// Color a data row (negative positions count from the end) or `header`
    #[arg(long = "row-color", value_name = "INDEX=FG[/BG]", allow_hyphen_values = true)]
    row_colors: Vec<String>,

    /// Color every data cell whose text contains TEXT
    #[arg(long = "highlight", value_name = "TEXT=FG[/BG]")]
    highlights: Vec<String>,

    /// Output the computed layout as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// The JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct Layout {
    column_widths: Vec<usize>,
    lines: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Setup logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();
    let mut table = build_table(&args)?;
    apply_colors(&mut table, &args)?;

    let options = render_options(&args);
    tracing::debug!(?options, "Resolved render options");

    if args.json {
        let plain = options.clone().with_output(OutputMode::Plain);
        let layout = Layout {
            column_widths: table.column_widths_with(&plain),
            lines: table
                .render_with(&plain)?
                .lines()
                .map(str::to_string)
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        println!("{}", table.render_with(&options)?);
    }

    Ok(())
}

fn split_row<'a>(row: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    row.split(separator).map(str::trim)
}

fn build_table(args: &Args) -> Result<Table> {
    let data = args.rows.iter().map(|row| split_row(row, &args.separator));
    let table = match args.header.as_deref() {
        Some(header) => Table::with_header(split_row(header, &args.separator), data),
        None => Table::new(data),
    };
    table.wrap_err("Failed to build table")
}

fn render_options(args: &Args) -> RenderOptions {
    let max_width = if args.fit {
        Some(terminal_width())
    } else {
        args.width
    };
    let output = match args.color {
        ColorChoice::Always => OutputMode::Ansi,
        ColorChoice::Never => OutputMode::Plain,
        ColorChoice::Auto if std::io::stdout().is_terminal() => OutputMode::Ansi,
        ColorChoice::Auto => OutputMode::Plain,
    };

    let mut options = RenderOptions::new().with_fill(args.fill).with_output(output);
    if let Some(limit) = args.max_column_width {
        options = options.with_max_column_width(limit);
    }
    if let Some(limit) = max_width {
        options = options.with_max_width(limit);
    }
    options
}

fn terminal_width() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(width), _)) => usize::from(width),
        None => {
            tracing::debug!(fallback = FALLBACK_WIDTH, "Terminal width unavailable");
            FALLBACK_WIDTH
        }
    }
}

/// Attaches the formatters requested on the command line.
///
/// Later flags for the same column or row replace earlier ones.
fn apply_colors(table: &mut Table, args: &Args) -> Result<()> {
    for spec in &args.column_colors {
        let (column, style) = parse_assignment(spec)?;
        let key = match column.parse::<isize>() {
            Ok(index) => ColumnKey::Index(index),
            Err(_) => ColumnKey::Name(column.to_string()),
        };
        table
            .set_column_formatter(key, move |_, _, _| style)
            .wrap_err_with(|| format!("Invalid --column-color '{spec}'"))?;
    }

    for spec in &args.row_colors {
        let (row, style) = parse_assignment(spec)?;
        if row.eq_ignore_ascii_case("header") {
            table.header_mut().set_formatter(move |_, _, _| style);
            continue;
        }
        let index = row
            .parse::<isize>()
            .map_err(|_| eyre!("Invalid --row-color '{spec}': '{row}' is not a row index"))?;
        table
            .set_row_formatter(index, move |_, _, _| style)
            .wrap_err_with(|| format!("Invalid --row-color '{spec}'"))?;
    }

    for spec in &args.highlights {
        let (needle, style) = parse_assignment(spec)?;
        let mut matched = 0;
        for r in 0..table.len() {
            for c in 0..table.column_count() {
                let Some(cell) = table.cell_mut(r as isize, c as isize) else {
                    continue;
                };
                if cell.text().contains(needle) {
                    cell.set_formatter(move |_, _, _| style);
                    matched += 1;
                }
            }
        }
        tracing::debug!(needle, matched, "Applied highlight");
    }

    Ok(())
}

/// Splits `KEY=FG[/BG]` at the last `=` so that keys may contain `=`.
fn parse_assignment(spec: &str) -> Result<(&str, CellColor)> {
    let (key, colors) = spec
        .rsplit_once('=')
        .ok_or_else(|| eyre!("Invalid color assignment '{spec}': expected KEY=FG[/BG]"))?;
    let style = parse_style(colors).wrap_err_with(|| format!("Invalid color assignment '{spec}'"))?;
    Ok((key, style))
}

/// Parses `FG`, `FG/BG` or `/BG` into a style override.
fn parse_style(spec: &str) -> Result<CellColor, TableError> {
    let (fg, bg) = spec.split_once('/').unwrap_or((spec, ""));
    let parse = |name: &str| -> Result<Option<Color>, TableError> {
        match name.trim() {
            "" => Ok(None),
            name => Color::from_str(name).map(Some),
        }
    };
    Ok(CellColor::new(parse(fg)?, parse(bg)?))
}
