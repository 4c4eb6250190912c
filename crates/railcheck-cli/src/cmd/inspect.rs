//! Implementation of `railcheck inspect [FILE]`.
//!
//! Parses a map and prints summary statistics to stdout:
//! - city count
//! - road counts by gauge (wide / narrow)
//! - logical edge count of the route graph
//! - the verdict (YES / NO)
//!
//! In `--format json` mode a single JSON object is emitted; in human mode,
//! aligned key/value lines.
//!
//! Exit codes: 0 = success, 2 = read or parse failure.
use railcheck_core::{RailMap, RoadKind, RouteGraph, Verdict, build_graph, parse_map};

use crate::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from a parsed map and its route graph.
pub struct InspectStats {
    /// Number of cities.
    pub city_count: usize,
    /// Total number of roads, `N * (N - 1) / 2`.
    pub road_count: usize,
    /// Number of wide-gauge roads.
    pub wide_roads: usize,
    /// Number of narrow-gauge roads.
    pub narrow_roads: usize,
    /// Number of logical directed edges (equals `road_count`).
    pub edge_count: usize,
    /// The optimality verdict for the map.
    pub verdict: Verdict,
}

impl InspectStats {
    /// Computes statistics from a parsed map and its graph.
    pub fn from_map(map: &RailMap, graph: &RouteGraph) -> Self {
        Self {
            city_count: map.city_count(),
            road_count: map.road_count(),
            wide_roads: map.roads_of_kind(RoadKind::Wide),
            narrow_roads: map.roads_of_kind(RoadKind::Narrow),
            edge_count: graph.edge_count(),
            verdict: Verdict::for_graph(graph),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] (exit code 2) if the content cannot be
/// parsed, or [`CliError::IoError`] if writing to stdout fails.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let map = parse_map(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })?;
    let graph = build_graph(&map);
    let stats = InspectStats::from_map(&map, &graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "cities:        {}", stats.city_count)?;
    writeln!(w, "roads:         {}", stats.road_count)?;
    writeln!(w, "  wide:        {}", stats.wide_roads)?;
    writeln!(w, "  narrow:      {}", stats.narrow_roads)?;
    writeln!(w, "edges:         {}", stats.edge_count)?;
    writeln!(w, "verdict:       {}", stats.verdict.token())?;
    Ok(())
}

/// Writes inspect statistics as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "city_count": stats.city_count,
        "road_count": stats.road_count,
        "road_counts": {
            "wide": stats.wide_roads,
            "narrow": stats.narrow_roads,
        },
        "edge_count": stats.edge_count,
        "optimal": stats.verdict.is_optimal(),
        "verdict": stats.verdict.token(),
    });
    let json = serde_json::to_string_pretty(&obj).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
