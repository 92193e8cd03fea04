pub mod dijkstra;
pub mod path;
pub mod traits;

pub use path::{find_path, reconstruct_path};
pub use traits::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::Graph;

/// Runs [`dijkstra::Dijkstra`] from `start` over `graph`.
///
/// Never fails: an unknown `start` yields all-unreachable maps with
/// `source_found == false`.
pub fn compute<G: Graph>(graph: &G, start: &G::Node) -> ShortestPathResult<G::Node, G::Weight> {
    dijkstra::Dijkstra::new().compute_shortest_paths(graph, start)
}
