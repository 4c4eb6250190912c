//! Implementation of `railcheck check [FILE]`.
//!
//! Parses the map, builds the route graph, runs cycle detection, and prints
//! exactly one line to stdout: the verdict token (`YES` for an optimal map,
//! `NO` otherwise), or in `--format json` mode a single JSON object.
//!
//! Exit codes:
//! - 0 = a verdict was printed (either token)
//! - 2 = the input could not be read or parsed; no token is printed
use railcheck_core::{Verdict, build_graph, parse_map};

use crate::OutputFormat;
use crate::error::CliError;

/// Runs the `check` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) when `content` is not a
/// well-formed map — including the unknown-road-symbol case. No verdict is
/// written in that case.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let map = parse_map(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;

    let graph = build_graph(&map);
    let verdict = Verdict::for_graph(&graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, verdict),
        OutputFormat::Json => print_json(&mut out, verdict),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes the bare verdict token and a newline.
fn print_human<W: std::io::Write>(w: &mut W, verdict: Verdict) -> std::io::Result<()> {
    writeln!(w, "{}", verdict.token())
}

/// Writes a single JSON object: `{"optimal": bool, "verdict": "YES"|"NO"}`.
fn print_json<W: std::io::Write>(w: &mut W, verdict: Verdict) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "optimal": verdict.is_optimal(),
        "verdict": verdict.token(),
    });
    writeln!(w, "{obj}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
