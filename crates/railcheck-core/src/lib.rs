#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Core library for `railcheck`, a railroad-map optimality checker.
//!
//! A map over N cities names one road per city pair, each either wide-gauge
//! or narrow-gauge. The gauge orients a logical edge between the pair, and
//! the map is optimal exactly when the resulting directed graph is acyclic.
//!
//! The pipeline is [`parse_map`] → [`build_graph`] → [`Verdict::for_graph`]
//! (which runs [`is_cyclic`]). This crate performs no I/O; reading input and
//! printing the verdict belong to the `railcheck` binary.

pub mod cycles;
pub mod graph;
pub mod map;
pub mod road;
pub mod verdict;

pub use cycles::{is_cyclic, is_cyclic_from};
pub use graph::{RouteGraph, build_graph};
pub use map::{MapParseError, RailMap, parse_map};
pub use road::{NARROW_SYMBOL, RoadKind, WIDE_SYMBOL};
pub use verdict::Verdict;

/// Returns the current version of the railcheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }

    #[test]
    fn full_pipeline_yes() {
        let map = parse_map("3\nBB\nR\n").expect("valid map");
        let graph = build_graph(&map);
        assert_eq!(Verdict::for_graph(&graph).token(), "YES");
    }

    #[test]
    fn full_pipeline_no() {
        let map = parse_map("3\nBR\nB\n").expect("valid map");
        let graph = build_graph(&map);
        assert_eq!(Verdict::for_graph(&graph).token(), "NO");
    }
}
