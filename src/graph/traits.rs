use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a graph vertex.
///
/// `Ord` lets the priority queue break distance ties consistently.
pub trait NodeId: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Edge weight: a primitive unsigned integer, so weights are never negative.
pub trait EdgeWeight: PrimInt + Unsigned + Debug {}

impl<T> EdgeWeight for T where T: PrimInt + Unsigned + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph: Debug {
    type Node: NodeId;
    type Weight: EdgeWeight;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex
    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Node> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(
        &self,
        vertex: &Self::Node,
    ) -> Box<dyn Iterator<Item = (&Self::Node, Self::Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &Self::Node) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &Self::Node, to: &Self::Node) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Weight>;
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex with no edges. Returns false if it was already present.
    fn add_vertex(&mut self, vertex: Self::Node) -> bool;

    /// Removes a vertex together with its outgoing and incoming edges
    fn remove_vertex(&mut self, vertex: &Self::Node) -> bool;

    /// Adds or overwrites a directed edge. Both endpoints must already exist.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node, weight: Self::Weight) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(
        &mut self,
        from: &Self::Node,
        to: &Self::Node,
        weight: Self::Weight,
    ) -> bool;
}
