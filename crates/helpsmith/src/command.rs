//! The command description that help is generated from.
//!
//! A [`Command`] owns its whole tree: sub-commands live in the parent's
//! `commands` list. Descriptions are built in code with the builder methods
//! or loaded from YAML/JSON:
//!
//! ```yaml
//! name: deploy
//! version: 1.4.0
//! description: Ship a build to an environment.
//! args: "<env:string>"
//! options:
//!   - flags: -f, --force
//!     description: Skip the confirmation prompt.
//!   - flags: [-r, --region]
//!     type: "<region:string>"
//!     default: eu-west-1
//! commands:
//!   - name: status
//!     aliases: [st]
//!     description: Show deployment status.
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::HelpError;

/// Version shown in the header when neither a command nor any of its
/// parents declares one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// A command, its options and its sub-commands.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Command {
    /// Name used on the usage line and in the parent's command list.
    pub name: String,
    /// Version shown in the header, without the `v` prefix. When unset the
    /// nearest parent's version is shown, or [`DEFAULT_VERSION`].
    pub version: Option<String>,
    /// Long description. Only its first line is used in a parent's command list.
    pub description: Option<String>,
    /// Argument definition, e.g. `<source:string> [target:string]`.
    pub args: Option<String>,
    /// Alternative names.
    pub aliases: Vec<String>,
    /// Hidden commands are left out of the parent's command list.
    pub hidden: bool,
    /// Options, in display order.
    pub options: Vec<CommandOption>,
    /// Sub-commands, in display order.
    pub commands: Vec<Command>,
    /// Environment variables read by the command.
    pub env_vars: Vec<EnvVar>,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl Command {
    /// Creates a command with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the argument definition.
    pub fn args(mut self, args: impl Into<String>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// Add an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Hide the command from its parent's command list.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Add an option.
    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add a sub-command.
    pub fn subcommand(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Add an environment variable.
    pub fn env_var(mut self, env_var: EnvVar) -> Self {
        self.env_vars.push(env_var);
        self
    }

    /// Add an example.
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Options that are not hidden, in display order.
    pub fn visible_options(&self) -> impl Iterator<Item = &CommandOption> {
        self.options.iter().filter(|option| !option.hidden)
    }

    /// Sub-commands that are not hidden, in display order.
    pub fn visible_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter(|command| !command.hidden)
    }

    /// Returns true if `name` is this command's name or one of its aliases.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    /// Resolves a path of sub-command names or aliases.
    ///
    /// Returns every command along the path, excluding `self`; an empty path
    /// yields an empty list.
    pub fn find_path(&self, path: &[&str]) -> Option<Vec<&Command>> {
        let mut lineage = Vec::with_capacity(path.len());
        let mut current = self;
        for name in path {
            current = current.commands.iter().find(|c| c.is_named(name))?;
            lineage.push(current);
        }
        Some(lineage)
    }

    /// Finds a nested sub-command by names or aliases.
    ///
    /// ```rust
    /// use helpsmith::Command;
    ///
    /// let root = Command::new("git")
    ///     .subcommand(Command::new("remote").subcommand(Command::new("add").alias("a")));
    /// assert_eq!(root.find(&["remote", "a"]).map(|c| c.name.as_str()), Some("add"));
    /// assert!(root.find(&["nope"]).is_none());
    /// ```
    pub fn find(&self, path: &[&str]) -> Option<&Command> {
        let lineage = self.find_path(path)?;
        Some(lineage.last().copied().unwrap_or(self))
    }

    /// Parses a YAML description.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, HelpError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a JSON description.
    pub fn from_json_str(json: &str) -> Result<Self, HelpError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a description file, choosing the format from its extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HelpError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let command = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?)?,
            "json" => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => return Err(HelpError::UnsupportedFormat(path.display().to_string())),
        };
        debug!(
            path = %path.display(),
            command = %command.name,
            options = command.options.len(),
            commands = command.commands.len(),
            "loaded command description"
        );
        Ok(command)
    }
}

/// An option (flag) of a command.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOption {
    /// Flag spellings, e.g. `["-f", "--force"]`. In YAML/JSON either a list
    /// or a comma separated string.
    #[serde(deserialize_with = "flag_list")]
    pub flags: Vec<String>,
    /// Description. Only the first line is shown in the options table.
    pub description: String,
    /// Value placeholder, e.g. `<level:integer>`.
    #[serde(rename = "type")]
    pub type_definition: Option<String>,
    /// Whether the option must be given.
    pub required: bool,
    /// Default value. Any present value is shown, including `0`, `false`
    /// and `""`.
    pub default: Option<Value>,
    /// Options this one requires.
    pub depends: Vec<String>,
    /// Options this one cannot be combined with.
    pub conflicts: Vec<String>,
    /// Hidden options are left out of the options table.
    pub hidden: bool,
}

impl CommandOption {
    /// Creates an option from a comma separated flag list and a description.
    ///
    /// ```rust
    /// use helpsmith::CommandOption;
    ///
    /// let option = CommandOption::new("-f, --force", "Skip the prompt.");
    /// assert_eq!(option.flags, vec!["-f", "--force"]);
    /// ```
    pub fn new(flags: &str, description: impl Into<String>) -> Self {
        CommandOption {
            flags: split_flags(flags),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the value placeholder.
    pub fn type_definition(mut self, definition: impl Into<String>) -> Self {
        self.type_definition = Some(definition.into());
        self
    }

    /// Mark the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Add an option this one depends on.
    pub fn depends(mut self, name: impl Into<String>) -> Self {
        self.depends.push(name.into());
        self
    }

    /// Add an option this one conflicts with.
    pub fn conflicts(mut self, name: impl Into<String>) -> Self {
        self.conflicts.push(name.into());
        self
    }

    /// Hide the option from the options table.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// An environment variable read by a command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvVar {
    /// Accepted names; the first is the preferred one.
    pub names: Vec<String>,
    /// Value placeholder, e.g. `<token:string>`.
    pub details: String,
    /// Description.
    pub description: String,
}

impl EnvVar {
    /// Creates an environment variable entry.
    pub fn new(
        names: impl IntoIterator<Item = impl Into<String>>,
        details: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        EnvVar {
            names: names.into_iter().map(Into::into).collect(),
            details: details.into(),
            description: description.into(),
        }
    }
}

/// A titled usage example.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    /// Short title; capitalized when rendered.
    pub name: String,
    /// Example body, usually a command line. May span several lines.
    pub description: String,
}

impl Example {
    /// Creates an example.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Example {
            name: name.into(),
            description: description.into(),
        }
    }
}

fn split_flags(flags: &str) -> Vec<String> {
    flags
        .split(',')
        .map(str::trim)
        .filter(|flag| !flag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagsRaw {
    Line(String),
    List(Vec<String>),
}

fn flag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match FlagsRaw::deserialize(deserializer)? {
        FlagsRaw::Line(line) => split_flags(&line),
        FlagsRaw::List(flags) => flags,
    })
}
