use log::{debug, trace, warn};
use num_traits::{CheckedAdd, Zero};
use std::collections::HashMap;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinHeap;
use crate::graph::Graph;

/// Dijkstra's algorithm over a lazy min-heap.
///
/// Instead of decreasing a queued key, every improvement pushes a new entry
/// and superseded entries are discarded when popped, giving
/// O((V + E) log E) time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra (lazy decrease-key)"
    }

    fn compute_shortest_paths<G: Graph>(
        &self,
        graph: &G,
        source: &G::Node,
    ) -> ShortestPathResult<G::Node, G::Weight> {
        let n = graph.vertex_count();

        // Every vertex starts unreachable with no predecessor
        let mut distances: HashMap<G::Node, Option<G::Weight>> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<G::Node, Option<G::Node>> = HashMap::with_capacity(n);
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), None);
            predecessors.insert(vertex.clone(), None);
        }

        let mut stats = SearchStats::default();

        if !graph.has_vertex(source) {
            warn!("start node {:?} is not in the graph, skipping search", source);
            return ShortestPathResult {
                distances,
                predecessors,
                source: source.clone(),
                source_found: false,
                stats,
            };
        }

        // Distance to source is 0
        let zero = <G::Weight as Zero>::zero();
        distances.insert(source.clone(), Some(zero));

        let mut queue = LazyMinHeap::with_capacity(n);
        queue.push(source.clone(), zero);

        while let Some((u, dist_u)) = queue.pop() {
            // A cheaper entry for u was pushed after this one; it has been handled already
            if matches!(distances.get(&u), Some(Some(best)) if dist_u > *best) {
                trace!("discarding stale entry ({:?}, {:?})", u, dist_u);
                stats.stale_entries += 1;
                continue;
            }
            stats.finalized += 1;

            for (v, weight) in graph.outgoing_edges(&u) {
                // Neighbours that are not vertices of the graph take no part in the result
                let Some(current) = distances.get_mut(v) else {
                    continue;
                };

                let Some(candidate) = dist_u.checked_add(&weight) else {
                    warn!(
                        "distance overflow relaxing {:?} -> {:?}, edge ignored",
                        u, v
                    );
                    continue;
                };

                let improves = match *current {
                    None => true,
                    Some(best) => candidate < best,
                };

                if improves {
                    *current = Some(candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), candidate);
                    stats.relaxations += 1;
                }
            }
        }

        stats.pushes = queue.pushes();
        stats.pops = queue.pops();
        debug!(
            "search from {:?} finalized {} of {} vertices ({} stale entries skipped)",
            source, stats.finalized, n, stats.stale_entries
        );

        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            source_found: true,
            stats,
        }
    }
}
