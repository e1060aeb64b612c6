//! # Helpsmith - help text for command-line programs
//!
//! Helpsmith renders the `--help` page of a command from a structured
//! [`Command`] description: usage and version header, description, options
//! with their hints, sub-commands, environment variables and examples. Every
//! section is an aligned table laid out by [`helpsmith_table`], so wrapped
//! descriptions and styled cells stay in their columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use helpsmith::{Command, CommandOption, HelpConfig, HelpGenerator};
//!
//! let cmd = Command::new("deploy")
//!     .version("1.4.0")
//!     .args("<env:string>")
//!     .option(CommandOption::new("-f, --force", "Skip the confirmation prompt."))
//!     .option(
//!         CommandOption::new("-n, --retries", "Attempts before giving up.")
//!             .type_definition("<count:integer>")
//!             .default_value(0),
//!     );
//!
//! let help = HelpGenerator::new(HelpConfig::default()).generate(&cmd);
//! assert!(help.starts_with("\nUsage:   deploy <env:string>\nVersion: v1.4.0\n"));
//! assert!(help.contains("(Default: 0)"));
//! ```
//!
//! ## Sections
//!
//! | Section | Shown when |
//! |---------|------------|
//! | Usage / Version | always (an unset version is inherited or `v0.0.0`) |
//! | Description | the description has text |
//! | Options | at least one option is not hidden |
//! | Commands | at least one sub-command is not hidden |
//! | Environment variables | at least one is declared |
//! | Examples | at least one is declared |
//!
//! ## Colors
//!
//! Colors are off unless [`HelpConfig::colors`] is set. The generator never
//! inspects the terminal; callers decide. Styled output measures exactly like
//! plain output.
//!
//! ## Loading descriptions
//!
//! [`Command::from_path`] reads YAML or JSON files; see the [`command`]
//! module for the format.

pub mod command;
mod config;
mod error;
mod format;
mod generator;
mod highlight;
mod style;

pub use command::{Command, CommandOption, EnvVar, Example, DEFAULT_VERSION};
pub use config::HelpConfig;
pub use error::HelpError;
pub use format::format_value;
pub use generator::{generate, HelpGenerator};
pub use highlight::{highlight_arguments, ArgumentDetails};
pub use style::{Palette, Tone};
