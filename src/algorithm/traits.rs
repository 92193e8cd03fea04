use serde::Serialize;
use std::collections::HashMap;

use crate::algorithm::path::reconstruct_path;
use crate::graph::{EdgeWeight, Graph, NodeId};
use crate::{Error, Result};

/// Counters collected while a query runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Queue insertions, the start entry included
    pub pushes: usize,
    /// Queue extractions, stale ones included
    pub pops: usize,
    /// Extracted entries discarded because a cheaper entry had superseded them
    pub stale_entries: usize,
    /// Edges that improved a tentative distance
    pub relaxations: usize,
    /// Vertices whose distance became final
    pub finalized: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Distance from the source to every vertex; `None` means unreachable
    pub distances: HashMap<N, Option<W>>,

    /// Predecessor of every vertex in the shortest path tree
    pub predecessors: HashMap<N, Option<N>>,

    /// Source vertex ID
    pub source: N,

    /// False when the source is not a vertex of the graph and nothing was searched
    pub source_found: bool,

    pub stats: SearchStats,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Surfaces the unknown-start diagnostic as an error
    pub fn check(&self) -> Result<()> {
        if self.source_found {
            Ok(())
        } else {
            Err(Error::UnknownStartNode(format!("{:?}", self.source)))
        }
    }

    /// Distance to `target`, `None` if unreachable or unknown
    pub fn distance(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    pub fn is_reachable(&self, target: &N) -> bool {
        self.distance(target).is_some()
    }

    /// Shortest path from the source to `target`, both ends included
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices.
    ///
    /// An unknown source is not an error here; see [`ShortestPathResult::check`].
    fn compute_shortest_paths<G: Graph>(
        &self,
        graph: &G,
        source: &G::Node,
    ) -> ShortestPathResult<G::Node, G::Weight>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path<N, W>(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>>
    where
        N: NodeId,
        W: EdgeWeight,
    {
        result.path_to(target).ok()
    }
}
