/// The directed route graph built from a [`RailMap`].
///
/// Cities are dense integer nodes in `[0, N)`, so the adjacency structure is
/// a plain `Vec` arena indexed by node id rather than a keyed map. The graph
/// is built once and read-only afterwards; the cycle detector in
/// [`crate::cycles`] only ever walks successor lists.
use crate::map::RailMap;
use crate::road::RoadKind;

// ---------------------------------------------------------------------------
// RouteGraph
// ---------------------------------------------------------------------------

/// An adjacency-list directed graph over dense integer nodes.
///
/// `successors(v)` preserves insertion order, which makes traversal
/// deterministic; correctness of cycle detection does not depend on it.
///
/// Construct with [`build_graph`] for the railroad orientation rule, or with
/// [`RouteGraph::from_arcs`] to build an arbitrary graph (tests, mainly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGraph {
    adjacency: Vec<Vec<usize>>,
}

impl RouteGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a graph with `node_count` nodes from an explicit arc list.
    ///
    /// Arcs whose endpoints fall outside `[0, node_count)` are not
    /// representable; callers guarantee bounds. Unlike [`build_graph`] this
    /// places no restriction on arc shape, so self-loops and parallel arcs
    /// are possible.
    pub fn from_arcs(node_count: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::with_nodes(node_count);
        for (source, target) in arcs {
            graph.adjacency[source].push(target);
        }
        graph
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the successors of `node` in insertion order.
    ///
    /// Returns an empty slice for an out-of-range node id.
    pub fn successors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// build_graph
// ---------------------------------------------------------------------------

/// Builds the directed route graph for a [`RailMap`].
///
/// For row `i`, symbol `j` describes the road between city `i` and city
/// `i + j + 1`. The gauge orients the logical edge:
///
/// - [`RoadKind::Wide`] — edge `i → i + j + 1`
/// - [`RoadKind::Narrow`] — edge `i + j + 1 → i`
///
/// Only the edge *direction* is chosen by the gauge; which pair of cities is
/// connected is fixed by the row layout, and both endpoints are always
/// distinct (`j + 1 >= 1`), so this construction never produces self-loops.
///
/// Infallible: every well-formed [`RailMap`] maps to exactly one graph.
/// O(V + E); no I/O.
pub fn build_graph(map: &RailMap) -> RouteGraph {
    let mut graph = RouteGraph::with_nodes(map.city_count());

    for (i, row) in map.rows().iter().enumerate() {
        for (j, kind) in row.iter().enumerate() {
            let far = i + j + 1;
            match kind {
                RoadKind::Wide => graph.adjacency[i].push(far),
                RoadKind::Narrow => graph.adjacency[far].push(i),
            }
        }
    }

    graph
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
