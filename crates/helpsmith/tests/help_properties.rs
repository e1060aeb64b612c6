//! Property-based tests for generated help documents.

use helpsmith::{generate, Command, CommandOption, HelpConfig, HelpGenerator};
use helpsmith_table::{display_width, strip_escapes};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,12}", 0..30).prop_map(|words| words.join(" "))
}

fn option() -> impl Strategy<Value = CommandOption> {
    (
        "[a-z]{1,10}",
        sentence(),
        prop::option::of("[a-z]{1,8}"),
        any::<bool>(),
        prop::option::of(0i64..100),
        any::<bool>(),
    )
        .prop_map(|(name, description, kind, required, default, hidden)| {
            let mut option = CommandOption::new(&format!("--{name}"), description);
            if let Some(kind) = kind {
                option = option.type_definition(format!("<{kind}:string>"));
            }
            if required {
                option = option.required();
            }
            if let Some(default) = default {
                option = option.default_value(default);
            }
            if hidden {
                option = option.hide();
            }
            option
        })
}

fn command() -> impl Strategy<Value = Command> {
    (
        "[a-z]{1,10}",
        sentence(),
        prop::collection::vec(option(), 0..6),
        prop::collection::vec(("[a-z]{1,10}", "[a-z]{1,20}", any::<bool>()), 0..4),
    )
        .prop_map(|(name, description, options, subs)| {
            let mut cmd = Command::new(name).description(description);
            for option in options {
                cmd = cmd.option(option);
            }
            for (sub, text, hidden) in subs {
                let mut sub = Command::new(sub).description(text);
                if hidden {
                    sub = sub.hide();
                }
                cmd = cmd.subcommand(sub);
            }
            cmd
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Colors change bytes, never the visible document.
    #[test]
    fn colors_do_not_change_visible_text(cmd in command()) {
        let plain = generate(&cmd);
        let styled = HelpGenerator::new(HelpConfig::new().colors(true)).generate(&cmd);
        prop_assert_eq!(strip_escapes(&styled), plain);
    }

    /// No line is wider than a full row of capped option columns.
    #[test]
    fn option_lines_respect_column_caps(cmd in command()) {
        let output = generate(&cmd);
        // indent + four capped columns + three gaps
        let limit = 2 + 60 + 60 + 80 + 60 + 6;
        for line in output.lines() {
            prop_assert!(display_width(line) <= limit, "{:?}", line);
        }
    }

    /// Only visible options are listed, each exactly once.
    #[test]
    fn visible_options_are_listed(cmd in command()) {
        let output = generate(&cmd);
        let flags: Vec<String> = output
            .lines()
            .filter_map(|line| line.trim_start().split_whitespace().next())
            .filter(|word| word.starts_with("--"))
            .map(str::to_string)
            .collect();
        let visible: Vec<String> = cmd.visible_options().map(|o| o.flags.join(", ")).collect();
        prop_assert_eq!(flags, visible);
        prop_assert_eq!(output.contains("Options:"), cmd.visible_options().next().is_some());
    }

    /// The same command always renders the same document.
    #[test]
    fn generation_is_deterministic(cmd in command(), colors in any::<bool>()) {
        let generator = HelpGenerator::new(HelpConfig::new().colors(colors));
        prop_assert_eq!(generator.generate(&cmd), generator.generate(&cmd));
    }
}
