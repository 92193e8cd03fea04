use crate::graph::traits::{EdgeWeight, Graph, MutableGraph, NodeId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A directed graph stored as node -> (neighbour -> weight).
///
/// Every node that should appear in query results must be a key, sinks and
/// isolated nodes included (with an empty neighbour map). Ordered maps keep
/// edge iteration, and therefore tie-breaking between equal-length paths,
/// identical across clones of the same graph.
///
/// Serialises as the nested object `{"A": {"B": 1}, "B": {}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    adjacency: BTreeMap<N, BTreeMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Adds a vertex unless present; returns a mutable handle to its neighbours
    fn entry(&mut self, vertex: N) -> &mut BTreeMap<N, W> {
        self.adjacency.entry(vertex).or_default()
    }

    /// Adds a directed edge, inserting missing endpoints as vertices
    pub fn connect(&mut self, from: N, to: N, weight: W) {
        self.entry(to.clone());
        self.entry(from).insert(to, weight);
    }

    /// Adds the edge in both directions with the same weight
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.connect(a.clone(), b.clone(), weight);
        self.connect(b, a, weight);
    }

    /// Like [`MutableGraph::add_edge`], but reports which endpoint is missing
    pub fn try_add_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if !self.adjacency.contains_key(&from) {
            return Err(Error::InvalidVertex(format!("{:?}", from)));
        }
        if !self.adjacency.contains_key(&to) {
            return Err(Error::InvalidVertex(format!("{:?}", to)));
        }
        self.entry(from).insert(to, weight);
        Ok(())
    }

    /// Relabels every vertex, keeping edges and weights
    pub fn map_nodes<M, F>(&self, mut f: F) -> AdjacencyGraph<M, W>
    where
        M: NodeId,
        F: FnMut(&N) -> M,
    {
        let mut mapped = AdjacencyGraph::new();
        for (vertex, neighbors) in &self.adjacency {
            let edges = neighbors.iter().map(|(to, w)| (f(to), *w)).collect();
            mapped.adjacency.insert(f(vertex), edges);
        }
        mapped
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> From<BTreeMap<N, BTreeMap<N, W>>> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    fn from(adjacency: BTreeMap<N, BTreeMap<N, W>>) -> Self {
        AdjacencyGraph { adjacency }
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(edges: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.connect(from, to, weight);
        }
        graph
    }
}

impl<N, W> Graph for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    type Node = N;
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        self.adjacency.vertices()
    }

    fn outgoing_edges(&self, vertex: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        self.adjacency.outgoing_edges(vertex)
    }

    fn has_vertex(&self, vertex: &N) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get_edge_weight(from, to)
    }
}

impl<N, W> MutableGraph for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: EdgeWeight,
{
    fn add_vertex(&mut self, vertex: N) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &N) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        self.try_add_edge(from, to, weight).is_ok()
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        self.adjacency
            .get_mut(from)
            .map_or(false, |neighbors| neighbors.remove(to).is_some())
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        match self.adjacency.get_mut(from).and_then(|n| n.get_mut(to)) {
            Some(existing) => {
                *existing = weight;
                true
            }
            None => false,
        }
    }
}

// Plain nested maps are graphs too, so callers can query data they already hold.

impl<N, W> Graph for BTreeMap<N, BTreeMap<N, W>>
where
    N: NodeId,
    W: EdgeWeight,
{
    type Node = N;
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(to, w)| (to, *w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &N) -> bool {
        self.contains_key(vertex)
    }

    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<N, W> Graph for HashMap<N, HashMap<N, W>>
where
    N: NodeId,
    W: EdgeWeight,
{
    type Node = N;
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(to, w)| (to, *w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &N) -> bool {
        self.contains_key(vertex)
    }

    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_requires_both_endpoints() {
        let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        assert!(graph.add_vertex("a"));
        assert!(!graph.add_vertex("a"));

        assert!(!graph.add_edge("a", "b", 3));
        assert_eq!(
            graph.try_add_edge("a", "b", 3),
            Err(Error::InvalidVertex("\"b\"".to_string()))
        );

        graph.add_vertex("b");
        assert!(graph.add_edge("a", "b", 3));
        assert_eq!(graph.get_edge_weight(&"a", &"b"), Some(3));
        assert!(!graph.has_edge(&"b", &"a"));
    }

    #[test]
    fn connect_inserts_sink_vertices() {
        let mut graph: AdjacencyGraph<char, u64> = AdjacencyGraph::new();
        graph.connect('x', 'y', 2);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.outgoing_edges(&'y').count(), 0);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut graph: AdjacencyGraph<u8, u16> = AdjacencyGraph::new();
        graph.add_undirected_edge(1, 2, 9);

        assert_eq!(graph.get_edge_weight(&1, &2), Some(9));
        assert_eq!(graph.get_edge_weight(&2, &1), Some(9));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn remove_vertex_drops_incoming_edges() {
        let mut graph: AdjacencyGraph<u32, u32> =
            vec![(1, 2, 1), (2, 3, 1), (3, 2, 4)].into_iter().collect();

        assert!(graph.remove_vertex(&2));
        assert!(!graph.has_vertex(&2));
        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&3, &2));
        assert!(!graph.remove_vertex(&2));
    }

    #[test]
    fn update_and_remove_edges() {
        let mut graph: AdjacencyGraph<u32, u32> = vec![(1, 2, 5)].into_iter().collect();

        assert!(graph.update_edge_weight(&1, &2, 1));
        assert_eq!(graph.get_edge_weight(&1, &2), Some(1));
        assert!(!graph.update_edge_weight(&2, &1, 1));

        assert!(graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&1, &2));
    }

    #[test]
    fn json_shape_is_a_nested_object() {
        let graph: AdjacencyGraph<String, u64> =
            serde_json::from_str(r#"{"A": {"B": 1}, "B": {}}"#).unwrap();

        assert_eq!(graph.get_edge_weight(&"A".to_string(), &"B".to_string()), Some(1));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(serde_json::to_string(&graph).unwrap(), r#"{"A":{"B":1},"B":{}}"#);
    }

    #[test]
    fn map_nodes_relabels() {
        let graph: AdjacencyGraph<usize, u64> = vec![(0, 1, 4)].into_iter().collect();
        let named = graph.map_nodes(|v| format!("v{}", v));

        assert_eq!(named.get_edge_weight(&"v0".to_string(), &"v1".to_string()), Some(4));
    }
}
