/// The final answer for a railroad map.
use serde::Serialize;

use crate::cycles::is_cyclic;
use crate::graph::RouteGraph;

/// Whether a railroad map is optimal.
///
/// A map is optimal exactly when its route graph is acyclic. The output
/// tokens are fixed by the map format: `YES` for optimal, `NO` for not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The route graph is acyclic; the map is consistent.
    Optimal,
    /// The route graph contains a cycle; the map contradicts itself.
    NotOptimal,
}

impl Verdict {
    /// Runs cycle detection on `graph` and returns the verdict.
    pub fn for_graph(graph: &RouteGraph) -> Self {
        if is_cyclic(graph) {
            Verdict::NotOptimal
        } else {
            Verdict::Optimal
        }
    }

    /// Returns the single-line output token: `"YES"` or `"NO"`.
    pub fn token(self) -> &'static str {
        match self {
            Verdict::Optimal => "YES",
            Verdict::NotOptimal => "NO",
        }
    }

    /// Returns `true` for [`Verdict::Optimal`].
    pub fn is_optimal(self) -> bool {
        matches!(self, Verdict::Optimal)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
