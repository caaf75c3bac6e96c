use crate::graph::*;

/// Read-only access to a low-level graph, which is all that algorithms need.
pub trait QueryableGraph {
    /// Number of live vertices.
    fn vertex_size(&self) -> usize;
    /// Every live [VertexId] is below this bound.
    /// Algorithms size their per-vertex state by it.
    fn vertex_bound(&self) -> usize;
    /// Iterates over live vertices in insertion order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Number of adjacency entries.
    fn edge_size(&self) -> usize;
    /// Iterates over the adjacency list of a vertex in insertion order.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;
}

/// A graph whose adjacency entries carry weights.
pub trait WeightedQueryableGraph: QueryableGraph {
    type Weight: Weight;

    fn weighted_out_edges(
        &self,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = WeightedEdge<Self::Weight>> + '_>;
}
