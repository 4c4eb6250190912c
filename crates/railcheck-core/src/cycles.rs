/// Cycle detection over a [`RouteGraph`].
///
/// Iterative depth-first traversal with three-coloring. Each node moves
/// through at most three states — unvisited, in progress (on the active
/// traversal path), finished — and never regresses. A back edge, i.e. a
/// successor that is already in progress, proves a directed cycle.
///
/// The traversal uses an explicit work stack instead of recursion, so deep
/// graphs cannot overflow the call stack. A node is pushed, marked in
/// progress, pushed *again* beneath its successors, and marked finished on
/// its second pop; successors already finished are skipped — they were fully
/// explored without closing a cycle and cannot close one now.
use crate::graph::RouteGraph;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Traversal state of a node during one detection pass.
///
/// Stored in a fixed-size array indexed by node id. Within a pass a node's
/// color only ever advances `Unvisited → InProgress → Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet reached by any traversal.
    Unvisited,
    /// On the active traversal path; reaching it again closes a cycle.
    InProgress,
    /// Fully explored; cannot participate in any new cycle.
    Finished,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if the graph contains a directed cycle.
///
/// Every node is tried as a traversal root, so cycles in components not
/// reachable from node 0 are found as well. Equivalent to
/// [`is_cyclic_from`] with roots `0..node_count`.
///
/// Total and O(V + E): each node is colored at most twice and each edge
/// examined a bounded number of times.
pub fn is_cyclic(graph: &RouteGraph) -> bool {
    is_cyclic_from(graph, 0..graph.node_count())
}

/// Returns `true` if a cycle is reachable from any of the given roots.
///
/// For a complete answer `roots` must cover every node of the graph; the
/// result is then independent of the iteration order. Roots already colored
/// by an earlier traversal are skipped in O(1).
pub fn is_cyclic_from(graph: &RouteGraph, roots: impl IntoIterator<Item = usize>) -> bool {
    let mut colors = vec![Color::Unvisited; graph.node_count()];

    for root in roots {
        if colors[root] == Color::Unvisited && dfs_finds_back_edge(graph, root, &mut colors) {
            return true;
        }
    }

    false
}

// ---------------------------------------------------------------------------
// Internal: single-root traversal
// ---------------------------------------------------------------------------

/// Runs one explicit-stack depth-first traversal rooted at `root`.
///
/// Returns `true` as soon as a back edge (an `InProgress` successor) is
/// found. On a clean return every node reached from `root` is `Finished`.
fn dfs_finds_back_edge(graph: &RouteGraph, root: usize, colors: &mut [Color]) -> bool {
    let mut stack = vec![root];

    while let Some(v) = stack.pop() {
        match colors[v] {
            Color::Unvisited => {
                colors[v] = Color::InProgress;
                // Re-push v so the second pop marks it finished after all
                // of its successors have been explored.
                stack.push(v);

                for &w in graph.successors(v) {
                    match colors[w] {
                        Color::Unvisited => stack.push(w),
                        Color::InProgress => return true,
                        Color::Finished => {}
                    }
                }
            }
            Color::InProgress => {
                colors[v] = Color::Finished;
            }
            // A node can sit on the stack more than once; later copies of a
            // finished node are no-ops.
            Color::Finished => {}
        }
    }

    false
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
