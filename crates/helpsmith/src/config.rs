//! Help generation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for help generation.
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `colors` | `false` | Emit terminal style escapes |
/// | `hints` | `true` | Show the `(required, Default: ..)` option column |
/// | `types` | `true` | Show `:type` in argument placeholders |
/// | `indent` | `2` | Indentation of section labels and tables |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Emit terminal style escapes. Resolved by the caller; never detected here.
    pub colors: bool,
    /// Show option hints.
    pub hints: bool,
    /// Show argument types.
    pub types: bool,
    /// Spaces before section labels and section tables.
    pub indent: usize,
}

impl Default for HelpConfig {
    fn default() -> Self {
        HelpConfig {
            colors: false,
            hints: true,
            types: true,
            indent: 2,
        }
    }
}

impl HelpConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn colors on or off.
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Turn option hints on or off.
    pub fn hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Turn argument types on or off.
    pub fn types(mut self, types: bool) -> Self {
        self.types = types;
        self
    }

    /// Set the section indentation.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
