//! End-to-end tests for help generation.

use helpsmith::{
    generate, Command, CommandOption, EnvVar, Example, HelpConfig, HelpError, HelpGenerator,
};
use helpsmith_table::{display_width, strip_escapes};
use std::io::Write;

// ============================================================================
// Fixtures
// ============================================================================

const DEMO: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/deploy.yaml");

const DEMO_HELP: &str = concat!(
        "\n",
        "Usage:   deploy <env:string>\n",
        "Version: v1.4.0\n",
        "\n",
        "  Description:\n",
        "\n",
        "  Ship a build to an environment.\n",
        "  \n",
        "  The build is uploaded, health-checked and then promoted.\n",
        "\n",
        "  Options:\n",
        "\n",
        "  -h, --help                      - Show this help.\n",
        "  -f, --force                     - Skip the confirmation prompt.      (conflicts: dry-run)\n",
        "  -r, --region   <region:string>  - Target region.                     (Default: \"eu-west-1\")\n",
        "  -n, --retries  <count:integer>  - Attempts before giving up.         (Default: 0, depends: region)\n",
        "  --dry-run                       - Print the plan without uploading.\n",
        "\n",
        "  Commands:\n",
        "\n",
        "  status, st                    - Show deployment status.\n",
        "  rollback    [release:string]  - Undo the last release.\n",
        "\n",
        "  Environment variables:\n",
        "\n",
        "  DEPLOY_TOKEN  <token:string>  - API token.\n",
        "\n",
        "  Examples:\n",
        "\n",
        "  Basic:\n",
        "                 deploy production\n",
        "  Pinned region:\n",
        "                 deploy staging --region us-east-2\n",
);

fn demo() -> Command {
    Command::from_path(DEMO).expect("demo description loads")
}

fn colored() -> HelpGenerator {
    HelpGenerator::new(HelpConfig::new().colors(true))
}

fn built_in_code() -> Command {
    Command::new("deploy")
        .version("1.4.0")
        .description("Ship a build to an environment.")
        .args("<env:string>")
        .option(CommandOption::new("-h, --help", "Show this help."))
        .option(CommandOption::new("-f, --force", "Skip the confirmation prompt.").conflicts("dry-run"))
        .option(
            CommandOption::new("-r, --region", "Target region.")
                .type_definition("<region:string>")
                .default_value("eu-west-1"),
        )
        .option(CommandOption::new("--debug", "Internal.").hide())
        .subcommand(
            Command::new("status")
                .alias("st")
                .description("Show deployment status.\nMore detail."),
        )
        .subcommand(
            Command::new("rollback")
                .args("[release:string]")
                .description("Undo the last release."),
        )
        .env_var(EnvVar::new(["DEPLOY_TOKEN"], "<token:string>", "API token."))
        .example(Example::new("basic", "deploy production"))
}

// ============================================================================
// Plain output
// ============================================================================

#[test]
fn demo_description_renders_exactly() {
    let output = generate(&demo());
    assert_eq!(output, DEMO_HELP, "output:\n{output}");
}

#[test]
fn command_built_in_code_renders_exactly() {
    let output = generate(&built_in_code());
    let expected = concat!(
        "\n",
        "Usage:   deploy <env:string>\n",
        "Version: v1.4.0\n",
        "\n",
        "  Description:\n",
        "\n",
        "  Ship a build to an environment.\n",
        "\n",
        "  Options:\n",
        "\n",
        "  -h, --help                     - Show this help.\n",
        "  -f, --force                    - Skip the confirmation prompt.  (conflicts: dry-run)\n",
        "  -r, --region  <region:string>  - Target region.                 (Default: \"eu-west-1\")\n",
        "\n",
        "  Commands:\n",
        "\n",
        "  status, st                    - Show deployment status.\n",
        "  rollback    [release:string]  - Undo the last release.\n",
        "\n",
        "  Environment variables:\n",
        "\n",
        "  DEPLOY_TOKEN  <token:string>  - API token.\n",
        "\n",
        "  Examples:\n",
        "\n",
        "  Basic:\n",
        "         deploy production\n",
    );
    assert_eq!(output, expected, "output:\n{output}");
}

#[test]
fn hidden_entries_are_not_listed() {
    let output = generate(&demo());
    assert!(!output.contains("--trace"), "output:\n{output}");
    assert!(
        !output.lines().any(|line| line.trim_start().starts_with("gc")),
        "output:\n{output}"
    );
}

#[test]
fn example_body_sits_below_its_title() {
    let cmd = Command::new("tool").example(Example::new("basic", "do the thing"));
    let output = generate(&cmd);
    let lines: Vec<&str> = output.lines().collect();
    let title = lines
        .iter()
        .position(|line| line.trim() == "Basic:")
        .expect("example title present");
    assert_eq!(lines[title + 1].trim(), "do the thing");
    assert!(lines[title + 1].starts_with("         "));
}

#[test]
fn hints_follow_fixed_order() {
    let cmd = Command::new("tool").option(
        CommandOption::new("--opt", "An option.")
            .conflicts("bar")
            .depends("foo")
            .default_value(0)
            .required(),
    );
    let output = generate(&cmd);
    assert!(
        output.contains("(required, Default: 0, depends: foo, conflicts: bar)"),
        "output:\n{output}"
    );
}

#[test]
fn generation_is_idempotent() {
    let cmd = demo();
    let generator = colored();
    assert_eq!(generator.generate(&cmd), generator.generate(&cmd));
    assert_eq!(generate(&cmd), generate(&cmd));
}

// ============================================================================
// Colored output
// ============================================================================

#[test]
fn colored_output_has_same_visible_text() {
    let output = colored().generate(&demo());
    assert!(output.contains('\x1b'));
    assert_eq!(strip_escapes(&output), DEMO_HELP);
}

#[test]
fn colored_lines_measure_like_plain_lines() {
    let plain = generate(&demo());
    let styled = colored().generate(&demo());
    let plain_widths: Vec<usize> = plain.lines().map(display_width).collect();
    let styled_widths: Vec<usize> = styled.lines().map(display_width).collect();
    assert_eq!(plain_widths, styled_widths);
}

#[test]
fn colored_hints_use_distinct_tones() {
    let cmd = Command::new("tool").option(
        CommandOption::new("--opt", "An option.")
            .required()
            .default_value(0)
            .depends("foo")
            .conflicts("bar"),
    );
    let output = colored().generate(&cmd);
    assert!(output.contains("\x1b[33mrequired\x1b[0m"), "output:\n{output:?}");
    assert!(output.contains("\x1b[34m--opt\x1b[0m"), "output:\n{output:?}");
    assert!(output.contains("\x1b[31mdepends: \x1b[0m"), "output:\n{output:?}");
    assert!(output.contains("\x1b[3mfoo\x1b[0m"), "output:\n{output:?}");
}

// ============================================================================
// Sub-command paths
// ============================================================================

#[test]
fn sub_command_help_shows_full_path() {
    let output = HelpGenerator::default()
        .generate_path(&demo(), &["rollback"])
        .unwrap();
    assert_eq!(
        output,
        "\nUsage:   deploy rollback [release:string]\nVersion: v1.4.0\n\n  Description:\n\n  Undo the last release.\n\n  Options:\n\n  --yes  - Do not ask.  (required)\n"
    );
}

#[test]
fn sub_command_alias_resolves() {
    let output = HelpGenerator::default()
        .generate_path(&demo(), &["st"])
        .unwrap();
    assert!(output.starts_with("\nUsage:   deploy status\nVersion: v1.4.0\n"), "output:\n{output}");
    assert!(output.contains("Includes the last ten releases."));
}

#[test]
fn unknown_sub_command_is_an_error() {
    let err = HelpGenerator::default()
        .generate_path(&demo(), &["publish"])
        .unwrap_err();
    assert!(matches!(err, HelpError::UnknownCommand { ref path } if path == "publish"));
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn json_and_yaml_descriptions_agree() {
    let yaml = demo();
    let json = serde_json::to_string(&yaml).unwrap();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let loaded = Command::from_path(file.path()).unwrap();

    assert_eq!(loaded, yaml);
    assert_eq!(generate(&loaded), DEMO_HELP);
}

#[test]
fn yml_extension_is_yaml() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "name: tiny\nversion: 0.0.1").unwrap();
    let cmd = Command::from_path(file.path()).unwrap();
    assert_eq!(generate(&cmd), "\nUsage:   tiny\nVersion: v0.0.1\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Command::from_path(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, HelpError::Io(_)));
}
