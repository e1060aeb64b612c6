//! Style-aware line splitting and word wrapping.
//!
//! Styles never bleed across physical lines: whenever a line is broken while
//! an SGR style is active, the line is closed with a reset and the active
//! sequences are replayed at the start of the next line.

use crate::ansi::{char_width, display_width, is_reset, is_sgr, segments, Segment, RESET};

/// Accumulates physical lines while tracking the active style.
#[derive(Debug, Default)]
struct Lines {
    done: Vec<String>,
    current: String,
    width: usize,
    /// SGR sequences emitted since the last reset, in order.
    open: String,
}

impl Lines {
    fn escape(&mut self, seq: &str) {
        self.current.push_str(seq);
        if is_reset(seq) {
            self.open.clear();
        } else if is_sgr(seq) {
            self.open.push_str(seq);
        }
    }

    fn push(&mut self, c: char) {
        self.current.push(c);
        self.width += char_width(c);
    }

    fn emit(&mut self, segments: &[Segment<'_>]) {
        for segment in segments {
            match *segment {
                Segment::Escape(seq) => self.escape(seq),
                Segment::Char(c) => self.push(c),
            }
        }
    }

    /// Emits only the escapes of a token whose characters are being dropped.
    fn emit_escapes(&mut self, segments: &[Segment<'_>]) {
        for segment in segments {
            if let Segment::Escape(seq) = *segment {
                self.escape(seq);
            }
        }
    }

    /// Emits a token that is wider than `limit`, breaking it at the limit.
    fn emit_hard(&mut self, segments: &[Segment<'_>], limit: usize) {
        for segment in segments {
            match *segment {
                Segment::Escape(seq) => self.escape(seq),
                Segment::Char(c) => {
                    if self.width > 0 && self.width + char_width(c) > limit {
                        self.break_line();
                    }
                    self.push(c);
                }
            }
        }
    }

    fn break_line(&mut self) {
        let mut line = std::mem::replace(&mut self.current, self.open.clone());
        if !self.open.is_empty() {
            line.push_str(RESET);
        }
        self.done.push(line);
        self.width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.done.push(self.current);
        self.done
    }
}

/// Whitespace that a line may break on. No-break spaces never qualify.
fn is_break(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

/// A run of whitespace or of non-whitespace characters, with the escapes
/// that belong to it.
#[derive(Debug)]
struct Token<'a> {
    segments: Vec<Segment<'a>>,
    width: usize,
    space: bool,
}

/// Splits a line into alternating word and whitespace tokens.
///
/// Escapes found inside a whitespace run are attached to the following word,
/// so they survive when the whitespace is dropped at a line break.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut pending = Vec::new();
    let mut current: Option<Token<'_>> = None;

    for segment in segments(line) {
        match segment {
            Segment::Escape(_) => match current.as_mut() {
                Some(token) if !token.space => token.segments.push(segment),
                _ => pending.push(segment),
            },
            Segment::Char(c) => {
                let space = is_break(c);
                if current.as_ref().map_or(true, |token| token.space != space) {
                    tokens.extend(current.take());
                    let mut token = Token {
                        segments: Vec::new(),
                        width: 0,
                        space,
                    };
                    if !space {
                        token.segments.append(&mut pending);
                    }
                    current = Some(token);
                }
                if let Some(token) = current.as_mut() {
                    token.segments.push(segment);
                    token.width += char_width(c);
                }
            }
        }
    }
    tokens.extend(current);

    if !pending.is_empty() {
        match tokens.last_mut() {
            Some(token) => token.segments.append(&mut pending),
            None => tokens.push(Token {
                segments: pending,
                width: 0,
                space: true,
            }),
        }
    }
    tokens
}

/// Splits a cell on its explicit line breaks, carrying styles across them.
pub(crate) fn split_lines(cell: &str) -> Vec<String> {
    let mut lines = Lines::default();
    for segment in segments(cell) {
        match segment {
            Segment::Escape(seq) => lines.escape(seq),
            Segment::Char('\n') => lines.break_line(),
            Segment::Char(c) => lines.push(c),
        }
    }
    lines.finish()
}

/// Word-wraps a single line so no physical line is wider than `width`.
///
/// Breaks happen on whitespace, which is dropped at the break. A word wider
/// than `width` starts a new line and is hard-broken at `width` columns.
/// Leading whitespace of the first line is kept. A `width` of zero is
/// treated as one.
///
/// # Example
///
/// ```rust
/// use helpsmith_table::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// ```
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let limit = width.max(1);
    let mut lines = Lines::default();
    let mut gap: Option<Token<'_>> = None;

    for token in tokenize(line) {
        if token.space {
            match gap.as_mut() {
                Some(existing) => {
                    existing.width += token.width;
                    existing.segments.extend(token.segments);
                }
                None => gap = Some(token),
            }
            continue;
        }

        let gap_width = gap.as_ref().map_or(0, |g| g.width);
        if lines.width + gap_width + token.width <= limit {
            if let Some(g) = gap.take() {
                lines.emit(&g.segments);
            }
            lines.emit(&token.segments);
            continue;
        }

        if let Some(g) = gap.take() {
            lines.emit_escapes(&g.segments);
        }
        if lines.width > 0 {
            lines.break_line();
        }
        if token.width <= limit {
            lines.emit(&token.segments);
        } else {
            lines.emit_hard(&token.segments, limit);
        }
    }

    if let Some(g) = gap {
        lines.emit_escapes(&g.segments);
    }
    lines.finish()
}

/// Produces the physical lines of a cell under an optional width cap.
///
/// Explicit line breaks are always honored; lines wider than the cap are
/// word-wrapped.
pub(crate) fn wrap_cell(cell: &str, cap: Option<usize>) -> Vec<String> {
    let lines = split_lines(cell);
    let Some(cap) = cap else {
        return lines;
    };
    lines
        .into_iter()
        .flat_map(|line| {
            if display_width(&line) > cap {
                wrap(&line, cap)
            } else {
                vec![line]
            }
        })
        .collect()
}
