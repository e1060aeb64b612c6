//! Highlighting of argument placeholders.
//!
//! Argument definitions are space separated tokens such as
//! `<source:string> [target:string] <files...:path[]>`. Tokens wrapped in
//! `<>` (required) or `[]` (optional) are painted piece by piece; any other
//! token is left as it is. Spaces are kept exactly, so wrap points survive.

use crate::style::{Palette, Tone};

/// An argument placeholder split into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentDetails<'a> {
    /// True for `[...]` placeholders.
    pub optional: bool,
    /// The argument name, without the variadic marker.
    pub name: &'a str,
    /// True when the name ends with `...`.
    pub variadic: bool,
    /// The type after `:`, without the list marker.
    pub kind: Option<&'a str>,
    /// True when the type ends with `[]`.
    pub list: bool,
}

impl<'a> ArgumentDetails<'a> {
    /// Parses one placeholder token, or returns `None` if it is not one.
    ///
    /// ```rust
    /// use helpsmith::ArgumentDetails;
    ///
    /// let details = ArgumentDetails::parse("[files...:path[]]").unwrap();
    /// assert!(details.optional && details.variadic && details.list);
    /// assert_eq!(details.name, "files");
    /// assert_eq!(details.kind, Some("path"));
    /// assert!(ArgumentDetails::parse("--").is_none());
    /// ```
    pub fn parse(token: &'a str) -> Option<Self> {
        let (optional, inner) = if let Some(inner) = token.strip_prefix('<') {
            (false, inner.strip_suffix('>')?)
        } else if let Some(inner) = token.strip_prefix('[') {
            (true, inner.strip_suffix(']')?)
        } else {
            return None;
        };
        if inner.is_empty() {
            return None;
        }

        let (name, kind) = match inner.split_once(':') {
            Some((name, kind)) => (name, Some(kind)),
            None => (inner, None),
        };
        let (name, variadic) = match name.strip_suffix("...") {
            Some(name) => (name, true),
            None => (name, false),
        };
        let (kind, list) = match kind.map(|k| k.strip_suffix("[]").ok_or(k)) {
            Some(Ok(kind)) => (Some(kind), true),
            Some(Err(kind)) => (Some(kind), false),
            None => (None, false),
        };

        Some(ArgumentDetails {
            optional,
            name,
            variadic,
            kind,
            list,
        })
    }

    /// Paints the placeholder. With `types` off the `:type` part is dropped.
    pub fn paint(&self, palette: &Palette, types: bool) -> String {
        let (open, close) = if self.optional { ("[", "]") } else { ("<", ">") };
        let mut out = palette.paint(Tone::Bracket, open);
        let name = if self.variadic {
            format!("{}...", self.name)
        } else {
            self.name.to_string()
        };
        out.push_str(&palette.paint(Tone::Argument, &name));
        if let Some(kind) = self.kind.filter(|_| types) {
            out.push_str(&palette.paint(Tone::Bracket, ":"));
            out.push_str(&palette.paint(Tone::Type, kind));
        }
        if self.list {
            out.push_str(&palette.paint(Tone::List, "[]"));
        }
        out.push_str(&palette.paint(Tone::Bracket, close));
        out
    }
}

/// Highlights every placeholder of an argument definition.
///
/// ```rust
/// use helpsmith::{highlight_arguments, Palette};
///
/// let plain = Palette::plain();
/// assert_eq!(highlight_arguments("<src:string> [dst]", &plain, true), "<src:string> [dst]");
/// assert_eq!(highlight_arguments("<src:string> [dst]", &plain, false), "<src> [dst]");
/// ```
pub fn highlight_arguments(definition: &str, palette: &Palette, types: bool) -> String {
    definition
        .split(' ')
        .map(|token| match ArgumentDetails::parse(token) {
            Some(details) => details.paint(palette, types),
            None => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpsmith_table::{display_width, strip_escapes};

    #[test]
    fn parse_required() {
        let details = ArgumentDetails::parse("<name:string>").unwrap();
        assert_eq!(
            details,
            ArgumentDetails {
                optional: false,
                name: "name",
                variadic: false,
                kind: Some("string"),
                list: false,
            }
        );
    }

    #[test]
    fn parse_without_type() {
        let details = ArgumentDetails::parse("[tag]").unwrap();
        assert!(details.optional);
        assert_eq!(details.kind, None);
    }

    #[test]
    fn parse_rejects_non_placeholders() {
        assert!(ArgumentDetails::parse("file").is_none());
        assert!(ArgumentDetails::parse("<open").is_none());
        assert!(ArgumentDetails::parse("<>").is_none());
        assert!(ArgumentDetails::parse("").is_none());
    }

    #[test]
    fn plain_highlight_round_trips() {
        let plain = Palette::plain();
        for definition in [
            "<env:string> [tag:string]",
            "<files...:path[]>",
            "--  <rest...>",
            "literal words",
        ] {
            assert_eq!(highlight_arguments(definition, &plain, true), definition);
        }
    }

    #[test]
    fn types_can_be_hidden() {
        let plain = Palette::plain();
        assert_eq!(
            highlight_arguments("<files...:path[]> [n:integer]", &plain, false),
            "<files...[]> [n]"
        );
    }

    #[test]
    fn colored_highlight_keeps_width_and_spaces() {
        let colored = Palette::new(true);
        let definition = "<env:string> [tag:string]";
        let painted = highlight_arguments(definition, &colored, true);
        assert_ne!(painted, definition);
        assert_eq!(strip_escapes(&painted), definition);
        assert_eq!(display_width(&painted), definition.len());
        assert_eq!(strip_escapes(&painted).matches(' ').count(), 1);
    }

    #[test]
    fn empty_definition() {
        assert_eq!(highlight_arguments("", &Palette::new(true), true), "");
    }
}
