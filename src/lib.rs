//! Lazy Dijkstra - single-source shortest paths with stale-entry filtering
//!
//! The engine drives a binary min-heap that has no decrease-key operation.
//! Improved distances are pushed as fresh entries and superseded entries are
//! discarded when they surface, giving O((V + E) log E) time.
//!
//! Edge weights are unsigned integers, so the non-negativity the algorithm
//! relies on is carried by the type. Unreachable nodes report `None` as their
//! distance instead of a numeric sentinel.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    compute, dijkstra::Dijkstra, find_path, reconstruct_path, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Start node {0} is not a vertex of the graph")]
    UnknownStartNode(String),

    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("Predecessor chain from {end} did not reach the start after {steps} steps")]
    MalformedPredecessorChain { end: String, steps: usize },

    #[error("Invalid vertex: {0}")]
    InvalidVertex(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
