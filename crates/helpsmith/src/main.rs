//! Prints the help page of a command described in a YAML or JSON file.
//!
//! ```text
//! helpsmith demos/deploy.yaml
//! helpsmith demos/deploy.yaml release --color always
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use helpsmith::{Command, HelpConfig, HelpGenerator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when stdout supports it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn resolve(self) -> bool {
        match self {
            ColorChoice::Auto => console::Term::stdout().features().colors_supported(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Render help text for a described command
#[derive(Debug, Parser)]
#[command(name = "helpsmith", version, about)]
struct Cli {
    /// Command description file (.yaml, .yml or .json)
    file: PathBuf,

    /// Sub-command path to render instead of the root command
    command: Vec<String>,

    /// When to emit colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Hide the required/default/depends/conflicts hints
    #[arg(long)]
    no_hints: bool,

    /// Hide argument types
    #[arg(long)]
    no_types: bool,

    /// Indentation of sections
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

impl Cli {
    fn help_config(&self) -> HelpConfig {
        HelpConfig::new()
            .colors(self.color.resolve())
            .hints(!self.no_hints)
            .types(!self.no_types)
            .indent(self.indent)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = Command::from_path(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;

    let path: Vec<&str> = cli.command.iter().map(String::as_str).collect();
    let help = HelpGenerator::new(cli.help_config())
        .generate_path(&root, &path)
        .with_context(|| format!("rendering help for {}", root.name))?;
    print!("{help}");
    Ok(())
}
