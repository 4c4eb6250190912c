//! Property-based tests for the parse → build → detect pipeline.
//!
//! Laws checked with `proptest`-generated maps (up to a few dozen cities):
//! uniform-gauge maps are always acyclic, the detector is idempotent and
//! root-order independent, and flipping a single road in an all-wide map
//! creates a cycle exactly when the road skips at least one city.
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use railcheck_core::{RoadKind, RouteGraph, build_graph, is_cyclic, is_cyclic_from, parse_map};

/// Renders a full map in the textual input format from a closure giving the
/// gauge of the road between cities `i` and `k` (`i < k`).
fn render_map(city_count: usize, mut gauge: impl FnMut(usize, usize) -> RoadKind) -> String {
    let mut out = format!("{city_count}\n");
    for i in 0..city_count.saturating_sub(1) {
        for k in (i + 1)..city_count {
            out.push(gauge(i, k).symbol());
        }
        out.push('\n');
    }
    out
}

/// Strategy: a map where every road's gauge is chosen independently.
fn arbitrary_map(max_cities: usize) -> impl Strategy<Value = String> {
    (1..=max_cities).prop_flat_map(|n| {
        let road_count = n * n.saturating_sub(1) / 2;
        proptest::collection::vec(prop::bool::ANY, road_count).prop_map(move |bits| {
            let mut bits = bits.into_iter();
            render_map(n, move |_, _| {
                // The iterator covers exactly road_count roads.
                if bits.next().unwrap_or(false) {
                    RoadKind::Wide
                } else {
                    RoadKind::Narrow
                }
            })
        })
    })
}

proptest! {
    /// P1: an all-wide map is a DAG — every edge points low → high.
    #[test]
    fn all_wide_maps_are_acyclic(n in 1usize..40) {
        let input = render_map(n, |_, _| RoadKind::Wide);
        let map = parse_map(&input).expect("rendered map parses");
        prop_assert!(!is_cyclic(&build_graph(&map)));
    }

    /// P1 mirrored: an all-narrow map is the reverse DAG.
    #[test]
    fn all_narrow_maps_are_acyclic(n in 1usize..40) {
        let input = render_map(n, |_, _| RoadKind::Narrow);
        let map = parse_map(&input).expect("rendered map parses");
        prop_assert!(!is_cyclic(&build_graph(&map)));
    }

    /// P3: detection is a pure function of the graph — repeated runs agree.
    #[test]
    fn detection_is_idempotent(input in arbitrary_map(25)) {
        let map = parse_map(&input).expect("rendered map parses");
        let graph = build_graph(&map);
        prop_assert_eq!(is_cyclic(&graph), is_cyclic(&graph));
    }

    /// P4: the answer does not depend on the root iteration order.
    #[test]
    fn root_order_does_not_matter(input in arbitrary_map(25)) {
        let map = parse_map(&input).expect("rendered map parses");
        let graph = build_graph(&map);
        let n = graph.node_count();

        let forward = is_cyclic_from(&graph, 0..n);
        let backward = is_cyclic_from(&graph, (0..n).rev());
        // Odd-first, then even: a third unrelated covering order.
        let interleaved = is_cyclic_from(
            &graph,
            (0..n).filter(|v| v % 2 == 1).chain((0..n).filter(|v| v % 2 == 0)),
        );

        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, interleaved);
    }

    /// Flipping exactly one road (i, k) to narrow in an all-wide map closes
    /// a cycle iff k - i >= 2: the wide shortcut chain i → i+1 → k still
    /// exists, and the flipped road now runs k → i. An adjacent flip
    /// (k = i + 1) leaves no alternative low-to-high route into k.
    #[test]
    fn single_narrow_flip_law((n, i, k) in (3usize..30).prop_flat_map(|n| {
        (Just(n), 0..n - 1).prop_flat_map(|(n, i)| (Just(n), Just(i), i + 1..n))
    })) {
        let input = render_map(n, |a, b| {
            if (a, b) == (i, k) {
                RoadKind::Narrow
            } else {
                RoadKind::Wide
            }
        });
        let map = parse_map(&input).expect("rendered map parses");
        let cyclic = is_cyclic(&build_graph(&map));
        prop_assert_eq!(cyclic, k - i >= 2, "n={} i={} k={}", n, i, k);
    }

    /// Graph construction preserves counts: one node per city, one edge per
    /// road, regardless of gauges.
    #[test]
    fn build_preserves_counts(input in arbitrary_map(25)) {
        let map = parse_map(&input).expect("rendered map parses");
        let graph = build_graph(&map);
        prop_assert_eq!(graph.node_count(), map.city_count());
        prop_assert_eq!(graph.edge_count(), map.road_count());
        prop_assert_eq!(
            map.roads_of_kind(RoadKind::Wide) + map.roads_of_kind(RoadKind::Narrow),
            map.road_count()
        );
    }

    /// The detector agrees with a reference Kahn-style check on arbitrary
    /// arc lists, including shapes a RailMap can never produce.
    #[test]
    fn detector_agrees_with_kahn(
        (n, arcs) in (1usize..20).prop_flat_map(|n| {
            (Just(n), proptest::collection::vec((0..n, 0..n), 0..60))
        })
    ) {
        let graph = RouteGraph::from_arcs(n, arcs.iter().copied());
        prop_assert_eq!(is_cyclic(&graph), kahn_detects_cycle(&graph));
    }
}

/// Reference implementation: Kahn's algorithm. The graph is cyclic iff the
/// topological sort cannot consume every node.
fn kahn_detects_cycle(graph: &RouteGraph) -> bool {
    let n = graph.node_count();
    let mut in_degree = vec![0usize; n];
    for v in 0..n {
        for &w in graph.successors(v) {
            in_degree[w] += 1;
        }
    }

    let mut queue: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut consumed = 0usize;

    while let Some(v) = queue.pop() {
        consumed += 1;
        for &w in graph.successors(v) {
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push(w);
            }
        }
    }

    consumed != n
}
