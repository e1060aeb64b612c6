//! # Helpsmith Table - ANSI-aware column layout
//!
//! `helpsmith-table` lays out rows of cells into aligned columns for terminal
//! output. Cells may span several lines and may carry terminal style escapes;
//! escapes never count toward column widths and never leak from one physical
//! line into the next.
//!
//! ## Quick Start
//!
//! ```rust
//! use helpsmith_table::{layout, TableConfig};
//!
//! let rows = vec![
//!     vec!["--config <path>", "- Read settings from a file."],
//!     vec!["-q, --quiet", "- Only print errors."],
//! ];
//! let config = TableConfig::new().indent(2).padding(2).max_cell_width([60, 80]);
//!
//! let text = layout(&rows, &config);
//! assert_eq!(
//!     text,
//!     "  --config <path>  - Read settings from a file.\n  -q, --quiet      - Only print errors."
//! );
//! ```
//!
//! ## Layout Rules
//!
//! - Each column is as wide as its widest (wrapped) line.
//! - Lines wider than their column's `max_cell_width` wrap on whitespace;
//!   words longer than the cap are broken at the cap.
//! - A row is as tall as its tallest cell; shorter cells get blank lines.
//! - `padding` spaces follow every column but the last.
//! - Every line, continuation lines included, starts with `indent` spaces.
//! - Trailing spaces are trimmed from each line, indentation never is.
//!
//! ## Measurement
//!
//! [`display_width`] is the single width primitive used everywhere. It is
//! `console::measure_text_width`: escape sequences are skipped and East-Asian
//! wide characters count as two columns.

mod ansi;
mod config;
mod layout;
mod wrap;

pub use ansi::{cell_width, char_width, display_width, pad_right, strip_escapes, RESET};
pub use config::{PerColumn, ResolvedConfig, TableConfig};
pub use layout::{layout, Table};
pub use wrap::wrap;
