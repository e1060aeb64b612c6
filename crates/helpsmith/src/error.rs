//! Error types for loading command descriptions and resolving sub-commands.
//!
//! Rendering itself never fails; [`HelpError`] only comes out of the edges
//! that touch files, parsers or user-supplied command paths.

use thiserror::Error;

/// Error type for the fallible operations of this crate.
#[derive(Debug, Error)]
pub enum HelpError {
    /// Reading a description file failed.
    #[error("failed to read command description: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML description could not be parsed.
    #[error("invalid YAML command description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON description could not be parsed.
    #[error("invalid JSON command description: {0}")]
    Json(#[from] serde_json::Error),

    /// The description file extension is not a known format.
    #[error("unsupported description format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// No sub-command matches the requested path.
    #[error("unknown command '{path}'")]
    UnknownCommand {
        /// The requested path, space separated.
        path: String,
    },
}
