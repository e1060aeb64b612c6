//! Help document assembly.
//!
//! The generator turns one level of a [`Command`] into a cell matrix per
//! section, lays each matrix out with [`helpsmith_table::layout`] and joins
//! the blocks with labels and blank lines:
//!
//! ```text
//!
//! Usage:   deploy <env:string>
//! Version: v1.4.0
//!
//!   Options:
//!
//!   -h, --help  - Show this help.
//! ```

use helpsmith_table::{layout, TableConfig};
use tracing::debug;

use crate::command::{Command, CommandOption, DEFAULT_VERSION};
use crate::config::HelpConfig;
use crate::error::HelpError;
use crate::format::format_value;
use crate::highlight::highlight_arguments;
use crate::style::{Palette, Tone};

const DESCRIPTION_WIDTH: usize = 140;
const EXAMPLE_WIDTH: usize = 150;

/// Renders help documents for commands.
///
/// The generator is immutable; every call is independent and the same input
/// always produces the same output.
///
/// # Example
///
/// ```rust
/// use helpsmith::{Command, CommandOption, HelpConfig, HelpGenerator};
///
/// let cmd = Command::new("greet")
///     .option(CommandOption::new("-h, --help", "Show this help."));
/// let help = HelpGenerator::new(HelpConfig::default()).generate(&cmd);
/// assert_eq!(
///     help,
///     "\nUsage:   greet\nVersion: v0.0.0\n\n  Options:\n\n  -h, --help  - Show this help.\n"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct HelpGenerator {
    config: HelpConfig,
    palette: Palette,
}

impl HelpGenerator {
    /// Creates a generator for the given configuration.
    pub fn new(config: HelpConfig) -> Self {
        let palette = Palette::new(config.colors);
        HelpGenerator { config, palette }
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    /// Renders the help of `command`.
    pub fn generate(&self, command: &Command) -> String {
        let version = command.version.as_deref().unwrap_or(DEFAULT_VERSION);
        self.render(command, &command.name, version)
    }

    /// Renders the help of the sub-command of `root` at `path`.
    ///
    /// Path segments match sub-command names or aliases. The usage line
    /// shows the full command path, and a sub-command without a version shows
    /// the nearest parent's.
    ///
    /// ```rust
    /// use helpsmith::{Command, HelpConfig, HelpGenerator};
    ///
    /// let root = Command::new("tool")
    ///     .version("2.1.0")
    ///     .subcommand(Command::new("build").alias("b"));
    /// let help = HelpGenerator::new(HelpConfig::default())
    ///     .generate_path(&root, &["b"])
    ///     .unwrap();
    /// assert_eq!(help, "\nUsage:   tool build\nVersion: v2.1.0\n");
    /// ```
    pub fn generate_path(&self, root: &Command, path: &[&str]) -> Result<String, HelpError> {
        let lineage = root
            .find_path(path)
            .ok_or_else(|| HelpError::UnknownCommand {
                path: path.join(" "),
            })?;
        let Some(target) = lineage.last() else {
            return Ok(self.generate(root));
        };
        let usage = std::iter::once(root.name.as_str())
            .chain(lineage.iter().map(|c| c.name.as_str()))
            .collect::<Vec<_>>()
            .join(" ");
        let version = lineage
            .iter()
            .rev()
            .copied()
            .chain(std::iter::once(root))
            .find_map(|c| c.version.as_deref())
            .unwrap_or(DEFAULT_VERSION);
        Ok(self.render(target, &usage, version))
    }

    fn render(&self, command: &Command, usage: &str, version: &str) -> String {
        let sections = [
            self.description(command),
            self.options(command),
            self.commands(command),
            self.environment(command),
            self.examples(command),
        ];
        debug!(
            command = %command.name,
            sections = sections.iter().flatten().count(),
            colors = self.config.colors,
            "generating help"
        );

        let mut out = format!("\n{}\n", self.header(command, usage, version));
        for section in sections.into_iter().flatten() {
            out.push_str(&section);
        }
        out
    }

    fn header(&self, command: &Command, usage: &str, version: &str) -> String {
        let mut usage = self.palette.paint(Tone::Command, usage);
        if let Some(args) = command.args.as_deref().filter(|a| !a.is_empty()) {
            usage.push(' ');
            usage.push_str(&self.highlight(args));
        }
        let rows = [
            [self.palette.paint(Tone::Heading, "Usage:"), usage],
            [
                self.palette.paint(Tone::Heading, "Version:"),
                self.palette.paint(Tone::Version, &format!("v{version}")),
            ],
        ];
        layout(&rows, &TableConfig::new().padding(1))
    }

    fn description(&self, command: &Command) -> Option<String> {
        let text = dedent(command.description.as_deref()?);
        if text.is_empty() {
            return None;
        }
        let config = self.table().padding(1).max_cell_width(DESCRIPTION_WIDTH);
        Some(self.section("Description", &[[text]], &config))
    }

    fn options(&self, command: &Command) -> Option<String> {
        let options: Vec<&CommandOption> = command.visible_options().collect();
        if options.is_empty() {
            return None;
        }

        let typed = options
            .iter()
            .any(|o| o.type_definition.as_deref().is_some_and(|t| !t.is_empty()));
        let rows: Vec<Vec<String>> = options
            .iter()
            .map(|option| {
                let mut row = vec![self.names(&option.flags)];
                if typed {
                    row.push(self.highlight(option.type_definition.as_deref().unwrap_or_default()));
                }
                row.push(self.bullet(first_line(&option.description)));
                row.push(self.hints(option));
                row
            })
            .collect();

        let config = if typed {
            self.table().padding([2, 2, 2]).max_cell_width([60, 60, 80, 60])
        } else {
            self.table().padding([2, 2]).max_cell_width([60, 80, 60])
        };
        Some(self.section("Options", &rows, &config))
    }

    fn commands(&self, command: &Command) -> Option<String> {
        let commands: Vec<&Command> = command.visible_commands().collect();
        if commands.is_empty() {
            return None;
        }

        let with_args = commands
            .iter()
            .any(|c| c.args.as_deref().is_some_and(|a| !a.is_empty()));
        let rows: Vec<Vec<String>> = commands
            .iter()
            .map(|sub| {
                let names: Vec<String> = std::iter::once(&sub.name)
                    .chain(&sub.aliases)
                    .cloned()
                    .collect();
                let mut row = vec![self.names(&names)];
                if with_args {
                    row.push(self.highlight(sub.args.as_deref().unwrap_or_default()));
                }
                row.push(self.bullet(first_line(sub.description.as_deref().unwrap_or_default())));
                row
            })
            .collect();

        let padding: Vec<usize> = if with_args { vec![2, 2, 2] } else { vec![2, 2] };
        Some(self.section("Commands", &rows, &self.table().padding(padding)))
    }

    fn environment(&self, command: &Command) -> Option<String> {
        if command.env_vars.is_empty() {
            return None;
        }
        let rows: Vec<[String; 3]> = command
            .env_vars
            .iter()
            .map(|var| {
                [
                    self.names(&var.names),
                    self.highlight(&var.details),
                    self.bullet(&var.description),
                ]
            })
            .collect();
        Some(self.section("Environment variables", &rows, &self.table().padding(2)))
    }

    fn examples(&self, command: &Command) -> Option<String> {
        if command.examples.is_empty() {
            return None;
        }
        let rows: Vec<[String; 2]> = command
            .examples
            .iter()
            .map(|example| {
                [
                    self.palette
                        .paint(Tone::Example, &format!("{}:", capitalize(&example.name))),
                    format!("\n{}", example.description),
                ]
            })
            .collect();
        let config = self.table().padding(1).max_cell_width(EXAMPLE_WIDTH);
        Some(self.section("Examples", &rows, &config))
    }

    /// `(required, Default: .., depends: .., conflicts: ..)`, or empty.
    fn hints(&self, option: &CommandOption) -> String {
        if !self.config.hints {
            return String::new();
        }
        let mut hints = Vec::new();
        if option.required {
            hints.push(self.palette.paint(Tone::Warning, "required"));
        }
        if let Some(default) = &option.default {
            hints.push(format!(
                "{}{}",
                self.palette.paint(Tone::Info, "Default: "),
                format_value(default, &self.palette)
            ));
        }
        if !option.depends.is_empty() {
            hints.push(format!(
                "{}{}",
                self.palette.paint(Tone::Depends, "depends: "),
                self.references(&option.depends)
            ));
        }
        if !option.conflicts.is_empty() {
            hints.push(format!(
                "{}{}",
                self.palette.paint(Tone::Conflicts, "conflicts: "),
                self.references(&option.conflicts)
            ));
        }
        if hints.is_empty() {
            String::new()
        } else {
            format!("({})", hints.join(", "))
        }
    }

    fn section<R, S>(&self, label: &str, rows: &[R], config: &TableConfig) -> String
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        format!(
            "\n{}{}\n\n{}\n",
            " ".repeat(self.config.indent),
            self.palette.paint(Tone::Heading, &format!("{label}:")),
            layout(rows, config)
        )
    }

    fn table(&self) -> TableConfig {
        TableConfig::new().indent(self.config.indent)
    }

    fn highlight(&self, definition: &str) -> String {
        highlight_arguments(definition, &self.palette, self.config.types)
    }

    fn names(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| self.palette.paint(Tone::Flag, name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn references(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| self.palette.paint(Tone::Reference, name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn bullet(&self, text: &str) -> String {
        format!("{} {}", self.palette.paint(Tone::Bullet, "-"), text)
    }
}

/// Renders the help of `command` with the default configuration.
pub fn generate(command: &Command) -> String {
    HelpGenerator::default().generate(command)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Removes the common leading indentation and surrounding blank lines.
fn dedent(text: &str) -> String {
    let blank = |line: &str| line.trim().is_empty();
    let lines: Vec<&str> = text.lines().collect();
    let margin = lines
        .iter()
        .filter(|line| !blank(line))
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);
    let lines: Vec<&str> = lines
        .iter()
        .map(|&line| if blank(line) { "" } else { &line[margin..] })
        .collect();

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}
