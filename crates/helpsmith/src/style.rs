//! Terminal styles for help output.
//!
//! Every styled token of the help document belongs to a [`Tone`]. A
//! [`Palette`] turns a tone and a string into the string wrapped in the
//! tone's escape sequences, or returns it untouched when colors are off.

use console::Style;

/// The presentation category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Section labels and header keys (`Usage:`, `Options:`).
    Heading,
    /// The command path on the usage line.
    Command,
    /// The version string.
    Version,
    /// Option flags, command names, aliases, environment variable names.
    Flag,
    /// The `-` bullet in front of descriptions.
    Bullet,
    /// The `required` hint.
    Warning,
    /// The `Default:` hint label.
    Info,
    /// The `depends:` hint label.
    Depends,
    /// The `conflicts:` hint label.
    Conflicts,
    /// Option names listed by `depends` and `conflicts` hints.
    Reference,
    /// Example titles.
    Example,
    /// `<`, `>`, `[`, `]` and `:` of argument placeholders.
    Bracket,
    /// Argument names inside placeholders.
    Argument,
    /// Argument types inside placeholders.
    Type,
    /// The `[]` list marker of argument types.
    List,
    /// Quoted string values.
    Text,
    /// Numbers, booleans and null.
    Literal,
}

impl Tone {
    /// The console style used for this tone.
    pub fn style(self) -> Style {
        match self {
            Tone::Heading => Style::new().bold(),
            Tone::Command => Style::new().magenta().bright(),
            Tone::Version => Style::new().yellow(),
            Tone::Flag => Style::new().blue(),
            Tone::Bullet => Style::new().red().bold(),
            Tone::Warning => Style::new().yellow(),
            Tone::Info => Style::new().bold(),
            Tone::Depends => Style::new().red(),
            Tone::Conflicts => Style::new().red().bold(),
            Tone::Reference => Style::new().italic(),
            Tone::Example => Style::new().dim().bold(),
            Tone::Bracket => Style::new().yellow(),
            Tone::Argument => Style::new().magenta(),
            Tone::Type => Style::new().red(),
            Tone::List => Style::new().green(),
            Tone::Text => Style::new().green(),
            Tone::Literal => Style::new().yellow(),
        }
    }
}

/// Applies tones to text, or leaves text plain.
///
/// Whether colors are on is decided by the caller; the palette never looks
/// at the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    colors: bool,
}

impl Palette {
    /// A palette that emits escape sequences when `colors` is true.
    pub fn new(colors: bool) -> Self {
        Palette { colors }
    }

    /// A palette that never styles.
    pub fn plain() -> Self {
        Palette { colors: false }
    }

    /// Whether this palette emits escape sequences.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Wraps `text` in the escape sequences of `tone`.
    ///
    /// Empty text stays empty so no zero-width escape pairs end up in cells.
    ///
    /// ```rust
    /// use helpsmith::{Palette, Tone};
    ///
    /// assert_eq!(Palette::plain().paint(Tone::Warning, "required"), "required");
    /// assert_eq!(
    ///     Palette::new(true).paint(Tone::Warning, "required"),
    ///     "\x1b[33mrequired\x1b[0m"
    /// );
    /// ```
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.colors || text.is_empty() {
            return text.to_string();
        }
        tone.style().force_styling(true).apply_to(text).to_string()
    }
}
