//! Column layout: width resolution, row heights and rendering.

use std::fmt;

use tracing::trace;

use crate::ansi::{display_width, pad_right};
use crate::config::{PerColumn, ResolvedConfig, TableConfig};
use crate::wrap::wrap_cell;

/// Every cell of a table, split into its physical lines.
struct WrappedRows {
    /// `rows[row][column]` holds the lines of one cell.
    rows: Vec<Vec<Vec<String>>>,
    /// Resolved width of each column.
    widths: Vec<usize>,
}

impl WrappedRows {
    fn new<R, S>(rows: &[R], config: &ResolvedConfig) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let columns = config.padding.len();
        let rows: Vec<Vec<Vec<String>>> = rows
            .iter()
            .map(|row| {
                let row = row.as_ref();
                (0..columns)
                    .map(|col| {
                        let cell = row.get(col).map_or("", AsRef::as_ref);
                        wrap_cell(cell, config.caps[col])
                    })
                    .collect()
            })
            .collect();

        let mut widths = vec![0; columns];
        for row in &rows {
            for (width, lines) in widths.iter_mut().zip(row) {
                let widest = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
                *width = (*width).max(widest);
            }
        }
        WrappedRows { rows, widths }
    }
}

/// Lays out rows of cells into aligned, indented columns.
///
/// Rows shorter than the widest row are padded with empty cells. Lines are
/// joined with `\n` and the result has no trailing newline; zero rows
/// produce an empty string.
///
/// # Example
///
/// ```rust
/// use helpsmith_table::{layout, TableConfig};
///
/// let rows = vec![
///     vec!["-h, --help", "- Show this help."],
///     vec!["-V, --version", "- Show the version number."],
/// ];
/// let text = layout(&rows, &TableConfig::new().indent(2).padding(2));
/// assert_eq!(
///     text,
///     "  -h, --help     - Show this help.\n  -V, --version  - Show the version number."
/// );
/// ```
pub fn layout<R, S>(rows: &[R], config: &TableConfig) -> String
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let resolved = config.resolve(columns);
    let wrapped = WrappedRows::new(rows, &resolved);
    trace!(
        rows = rows.len(),
        columns,
        widths = ?wrapped.widths,
        "laying out table"
    );

    let prefix = " ".repeat(resolved.indent);
    let mut lines = Vec::new();
    for row in &wrapped.rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for index in 0..height {
            let mut content = String::new();
            for (col, cell) in row.iter().enumerate() {
                let text = cell.get(index).map_or("", String::as_str);
                content.push_str(&pad_right(text, wrapped.widths[col]));
                if col + 1 < columns {
                    content.extend(std::iter::repeat(' ').take(resolved.padding[col]));
                }
            }
            lines.push(format!("{prefix}{}", content.trim_end_matches(' ')));
        }
    }
    lines.join("\n")
}

/// A table of cells with its layout configuration.
///
/// `Table` renders through [`layout`]; it exists for callers that build a
/// table incrementally or want to print it with `{}`.
///
/// ```rust
/// use helpsmith_table::Table;
///
/// let table = Table::from_rows([["Usage:", "deploy <env>"], ["Version:", "v1.2.0"]]).padding(1);
/// assert_eq!(table.to_string(), "Usage:   deploy <env>\nVersion: v1.2.0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    config: TableConfig,
}

impl Table {
    /// Creates an empty table with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from any nested collection of strings.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            config: TableConfig::default(),
        }
    }

    /// Appends a row.
    pub fn row<R, S>(mut self, cells: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the indentation of every line.
    pub fn indent(mut self, indent: usize) -> Self {
        self.config.indent = indent;
        self
    }

    /// Set the gap after each column.
    pub fn padding(mut self, padding: impl Into<PerColumn>) -> Self {
        self.config.padding = padding.into();
        self
    }

    /// Set the wrap threshold of each column.
    pub fn max_cell_width(mut self, width: impl Into<PerColumn>) -> Self {
        self.config.max_cell_width = Some(width.into());
        self
    }

    /// The rows of this table.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The layout configuration of this table.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every column after wrapping.
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Vec::new();
        }
        WrappedRows::new(&self.rows, &self.config.resolve(columns)).widths
    }

    /// Renders the table.
    pub fn render(&self) -> String {
        layout(&self.rows, &self.config)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
