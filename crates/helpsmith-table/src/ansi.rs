//! ANSI-aware text measurement and padding.
//!
//! Every width computation in this crate goes through [`display_width`]:
//! escape sequences are preserved in output but never count toward the
//! visible width of a string.

use console::{measure_text_width, pad_str, strip_ansi_codes, AnsiCodeIterator, Alignment};

/// SGR sequence that turns every style attribute off.
pub const RESET: &str = "\x1b[0m";

/// One unit of a styled string: either an escape sequence or a visible character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Escape(&'a str),
    Char(char),
}

/// Splits a string into escape sequences and visible characters.
pub(crate) fn segments(s: &str) -> impl Iterator<Item = Segment<'_>> {
    AnsiCodeIterator::new(s).flat_map(|(part, is_escape)| {
        let escape = is_escape.then_some(Segment::Escape(part));
        let chars = part
            .chars()
            .filter(move |_| !is_escape)
            .map(Segment::Char);
        escape.into_iter().chain(chars)
    })
}

/// Display width of a single character in terminal columns.
///
/// Measured the same way as [`display_width`], so a line's width is the sum
/// of its characters' widths.
pub fn char_width(c: char) -> usize {
    let mut buf = [0; 4];
    measure_text_width(c.encode_utf8(&mut buf))
}

/// Returns the display width of a single line, ignoring escape sequences.
///
/// Wide (CJK) characters count as two columns, combining marks as zero.
///
/// # Example
///
/// ```rust
/// use helpsmith_table::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[33mrequired\x1b[0m"), 8);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Returns the visible width of a cell: the width of its widest line.
pub fn cell_width(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

/// Removes every escape sequence from a string.
pub fn strip_escapes(s: &str) -> String {
    strip_ansi_codes(s).into_owned()
}

/// Pads a string on the right with spaces to reach `width` visible columns.
///
/// Strings already at least `width` wide are returned unchanged.
///
/// ```rust
/// use helpsmith_table::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// True for SGR (`ESC [ ... m`) sequences.
pub(crate) fn is_sgr(seq: &str) -> bool {
    seq.starts_with("\x1b[") && seq.ends_with('m')
}

/// True for SGR sequences that reset every attribute (`ESC[m`, `ESC[0m`, `ESC[0;0m`).
pub(crate) fn is_reset(seq: &str) -> bool {
    is_sgr(seq)
        && seq[2..seq.len() - 1]
            .split(';')
            .all(|param| param.bytes().all(|b| b == b'0'))
}
