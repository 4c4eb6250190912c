#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::{CommandFactory, Parser};

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["check", "inspect"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in ["--format", "--max-file-size", "--help", "--version"] {
        assert!(help.contains(flag), "root help should mention flag '{flag}'");
    }
}

/// `check` with no FILE argument defaults to stdin.
#[test]
fn check_defaults_to_stdin() {
    let cli = Cli::try_parse_from(["railcheck", "check"]).expect("parses");
    match cli.command {
        Command::Check { file } => assert!(matches!(file, PathOrStdin::Stdin)),
        other => panic!("expected Check, got a different subcommand: {:?}", discriminant_name(&other)),
    }
}

/// An explicit `-` also selects stdin.
#[test]
fn dash_selects_stdin() {
    let cli = Cli::try_parse_from(["railcheck", "check", "-"]).expect("parses");
    match cli.command {
        Command::Check { file } => assert!(matches!(file, PathOrStdin::Stdin)),
        other => panic!("expected Check, got a different subcommand: {:?}", discriminant_name(&other)),
    }
}

/// Anything else parses as a filesystem path.
#[test]
fn file_argument_parses_as_path() {
    let cli = Cli::try_parse_from(["railcheck", "check", "map.rail"]).expect("parses");
    match cli.command {
        Command::Check {
            file: PathOrStdin::Path(p),
        } => assert_eq!(p, PathBuf::from("map.rail")),
        other => panic!("expected Check with a path: {:?}", discriminant_name(&other)),
    }
}

/// `--format json` is accepted as a global flag before the subcommand.
#[test]
fn global_format_flag_parses() {
    let cli = Cli::try_parse_from(["railcheck", "--format", "json", "inspect"]).expect("parses");
    assert!(matches!(cli.format, OutputFormat::Json));
}

/// `--max-file-size` overrides the default.
#[test]
fn max_file_size_flag_parses() {
    let cli =
        Cli::try_parse_from(["railcheck", "check", "--max-file-size", "1024"]).expect("parses");
    assert_eq!(cli.max_file_size, 1024);
}

/// A missing subcommand is a parse error.
#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["railcheck"]).is_err());
}

/// Returns the subcommand name for error messages in match arms.
fn discriminant_name(command: &Command) -> &'static str {
    match command {
        Command::Check { .. } => "check",
        Command::Inspect { .. } => "inspect",
    }
}
