//! Table layout configuration.
//!
//! Settings that can differ per column accept either one value for every
//! column or a list with one value per column. Both forms are normalized to a
//! per-column vector once, when layout starts, by [`PerColumn::expand`].

use serde::{Deserialize, Deserializer, Serialize};

/// A per-column integer setting.
///
/// In YAML or JSON this is either a number or a list of numbers. Negative
/// numbers are clamped to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PerColumnRaw", into = "PerColumnRaw")]
pub enum PerColumn {
    /// The same value for every column.
    All(usize),
    /// One value per column. Missing trailing entries repeat the last value.
    Each(Vec<usize>),
}

impl Default for PerColumn {
    fn default() -> Self {
        PerColumn::All(0)
    }
}

impl PerColumn {
    /// Expands the setting to exactly `columns` values.
    ///
    /// Lists shorter than `columns` repeat their last value, longer lists are
    /// cut, and an empty list yields zeros.
    ///
    /// ```rust
    /// use helpsmith_table::PerColumn;
    ///
    /// assert_eq!(PerColumn::All(2).expand(3), vec![2, 2, 2]);
    /// assert_eq!(PerColumn::Each(vec![1, 4]).expand(4), vec![1, 4, 4, 4]);
    /// assert_eq!(PerColumn::Each(vec![1, 4, 9]).expand(2), vec![1, 4]);
    /// ```
    pub fn expand(&self, columns: usize) -> Vec<usize> {
        match self {
            PerColumn::All(value) => vec![*value; columns],
            PerColumn::Each(values) => {
                let last = values.last().copied().unwrap_or(0);
                (0..columns)
                    .map(|i| values.get(i).copied().unwrap_or(last))
                    .collect()
            }
        }
    }
}

impl From<usize> for PerColumn {
    fn from(value: usize) -> Self {
        PerColumn::All(value)
    }
}

impl From<Vec<usize>> for PerColumn {
    fn from(values: Vec<usize>) -> Self {
        PerColumn::Each(values)
    }
}

impl From<&[usize]> for PerColumn {
    fn from(values: &[usize]) -> Self {
        PerColumn::Each(values.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for PerColumn {
    fn from(values: [usize; N]) -> Self {
        PerColumn::Each(values.to_vec())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PerColumnRaw {
    Scalar(i64),
    List(Vec<i64>),
}

impl From<PerColumnRaw> for PerColumn {
    fn from(raw: PerColumnRaw) -> Self {
        match raw {
            PerColumnRaw::Scalar(value) => PerColumn::All(clamp(value)),
            PerColumnRaw::List(values) => PerColumn::Each(values.into_iter().map(clamp).collect()),
        }
    }
}

impl From<PerColumn> for PerColumnRaw {
    fn from(value: PerColumn) -> Self {
        let widen = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        match value {
            PerColumn::All(v) => PerColumnRaw::Scalar(widen(v)),
            PerColumn::Each(values) => PerColumnRaw::List(values.into_iter().map(widen).collect()),
        }
    }
}

fn clamp(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

fn clamped<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    i64::deserialize(deserializer).map(clamp)
}

/// Layout settings for one table.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `indent` | `0` | Spaces before every physical line |
/// | `padding` | `0` | Gap after each column except the last |
/// | `max_cell_width` | unlimited | Wrap threshold per column; `0` means unlimited |
///
/// # Example
///
/// ```rust
/// use helpsmith_table::TableConfig;
///
/// let config = TableConfig::new()
///     .indent(2)
///     .padding([2, 2])
///     .max_cell_width([60, 80, 60]);
/// assert_eq!(config.indent, 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Spaces prefixed to every rendered line.
    #[serde(default, deserialize_with = "clamped")]
    pub indent: usize,
    /// Horizontal gap inserted after each column except the last.
    #[serde(default)]
    pub padding: PerColumn,
    /// Visible width above which cell lines are word-wrapped. `None` or `0`
    /// leaves a column unlimited.
    #[serde(default)]
    pub max_cell_width: Option<PerColumn>,
}

impl TableConfig {
    /// Creates a configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation of every line.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the gap after each column.
    pub fn padding(mut self, padding: impl Into<PerColumn>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the wrap threshold of each column.
    pub fn max_cell_width(mut self, width: impl Into<PerColumn>) -> Self {
        self.max_cell_width = Some(width.into());
        self
    }

    /// Normalizes every setting to exactly `columns` entries.
    pub fn resolve(&self, columns: usize) -> ResolvedConfig {
        let caps = match &self.max_cell_width {
            Some(widths) => widths
                .expand(columns)
                .into_iter()
                .map(|w| (w > 0).then_some(w))
                .collect(),
            None => vec![None; columns],
        };
        ResolvedConfig {
            indent: self.indent,
            padding: self.padding.expand(columns),
            caps,
        }
    }
}

/// A [`TableConfig`] expanded to a known number of columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Spaces before every line.
    pub indent: usize,
    /// Gap after each column.
    pub padding: Vec<usize>,
    /// Wrap threshold of each column, `None` when unlimited.
    pub caps: Vec<Option<usize>>,
}
