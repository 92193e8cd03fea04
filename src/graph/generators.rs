use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::{Error, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index;

/// Generates a random directed graph on vertices `0..n`.
///
/// Each vertex gets up to `edges_per_node` outgoing edges to distinct random
/// targets with weights in `0..=max_weight`. The same seed yields the same graph.
pub fn generate_random(
    n: usize,
    edges_per_node: usize,
    max_weight: u64,
    seed: u64,
) -> Result<AdjacencyGraph<usize, u64>> {
    if n == 0 {
        return Err(Error::InvalidRequest("node_count must be positive".to_string()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }

    // Self-loops never shorten a path, so they are simply not generated.
    let out_degree = edges_per_node.min(n - 1);
    for u in 0..n {
        // Sample from the n - 1 other vertices, shifting indices past u
        let targets = index::sample(&mut rng, n - 1, out_degree);
        for i in targets.into_iter() {
            let v = if i >= u { i + 1 } else { i };
            let weight = rng.gen_range(0..=max_weight);
            graph.connect(u, v, weight);
        }
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with undirected 4-neighbour edges.
///
/// Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(
    width: usize,
    height: usize,
    weight: u64,
) -> Result<AdjacencyGraph<usize, u64>> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidRequest(format!(
            "grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    let mut graph = AdjacencyGraph::new();
    // A 1x1 grid has no edges; its only vertex still has to be a key.
    graph.add_vertex(0);
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(vertex, vertex + 1, weight);
            }
            if y + 1 < height {
                graph.add_undirected_edge(vertex, vertex + width, weight);
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random(30, 3, 10, 7).unwrap();
        let b = generate_random(30, 3, 10, 7).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.vertex_count(), 30);
        assert_eq!(a.edge_count(), 90);
        for v in 0..30 {
            assert!(!a.has_edge(&v, &v));
        }
    }

    #[test]
    fn random_graph_caps_out_degree() {
        let graph = generate_random(3, 10, 5, 1).unwrap();
        assert_eq!(graph.edge_count(), 6);

        let single = generate_random(1, 4, 5, 1).unwrap();
        assert_eq!(single.vertex_count(), 1);
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn grid_has_expected_shape() {
        let grid = generate_grid(3, 2, 1).unwrap();
        assert_eq!(grid.vertex_count(), 6);
        // 2 rows of 2 horizontal edges plus 3 vertical edges, stored both ways
        assert_eq!(grid.edge_count(), 14);
        assert!(grid.has_edge(&0, &3));
        assert!(grid.has_edge(&4, &1));
        assert!(!grid.has_edge(&2, &3));

        let point = generate_grid(1, 1, 1).unwrap();
        assert_eq!(point.vertex_count(), 1);
        assert_eq!(point.edge_count(), 0);
    }

    #[test]
    fn random_targets_are_distinct_and_never_self() {
        let graph = generate_random(200, 5, 3, 9).unwrap();
        assert_eq!(graph.edge_count(), 1000);
        for u in 0..200 {
            assert_eq!(graph.outgoing_edges(&u).count(), 5);
            assert!(!graph.has_edge(&u, &u));
            assert!(graph.outgoing_edges(&u).all(|(v, _)| *v < 200));
        }
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(generate_random(0, 1, 1, 0), Err(Error::InvalidRequest(_))));
        assert!(matches!(generate_grid(0, 4, 1), Err(Error::InvalidRequest(_))));
    }
}
