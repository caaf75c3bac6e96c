//! Errors raised by graph operations.
use thiserror::Error;

/// All errors that graph operations may raise.
///
/// `K` names nodes in the error.
/// Algorithms over low-level graphs raise `GraphError<VertexId>`,
/// and labeled graphs translate them into `GraphError<L>` by [`GraphError::map_node`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<K> {
    /// The node is already in the graph.
    #[error("node {0:?} already exists")]
    DuplicateNode(K),

    /// The node is not in the graph.
    #[error("node {0:?} does not exist")]
    UnknownNode(K),

    /// Weights must not be negative.
    #[error("invalid weight {weight} on edge {from:?} -- {to:?}")]
    InvalidWeight { from: K, to: K, weight: String },

    /// The graph contains a cycle through this node.
    #[error("graph contains a cycle through node {0:?}")]
    Cycle(K),

    /// `to` is unreachable from `from`.
    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: K, to: K },

    /// The length of a path from `from` to `to` does not fit in a [`crate::graph::Distance`].
    #[error("distance from {from:?} to {to:?} overflows")]
    DistanceOverflow { from: K, to: K },

    /// The shortest-path tree refers to nodes that were removed since it was computed,
    /// or it was computed on another graph.
    #[error("shortest-path tree is out of date")]
    OutdatedTree,

    /// The query needs at least one node.
    #[error("graph is empty")]
    EmptyGraph,
}

/// Convenience result type for graph operations.
pub type Result<T, K> = std::result::Result<T, GraphError<K>>;

impl<K> GraphError<K> {
    /// Renames nodes mentioned in the error.
    pub fn map_node<L, F>(self, mut f: F) -> GraphError<L>
    where
        F: FnMut(K) -> L,
    {
        match self {
            GraphError::DuplicateNode(v) => GraphError::DuplicateNode(f(v)),
            GraphError::UnknownNode(v) => GraphError::UnknownNode(f(v)),
            GraphError::InvalidWeight { from, to, weight } => GraphError::InvalidWeight {
                from: f(from),
                to: f(to),
                weight,
            },
            GraphError::Cycle(v) => GraphError::Cycle(f(v)),
            GraphError::NoPath { from, to } => GraphError::NoPath {
                from: f(from),
                to: f(to),
            },
            GraphError::DistanceOverflow { from, to } => GraphError::DistanceOverflow {
                from: f(from),
                to: f(to),
            },
            GraphError::OutdatedTree => GraphError::OutdatedTree,
            GraphError::EmptyGraph => GraphError::EmptyGraph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e: GraphError<&str> = GraphError::NoPath { from: "A", to: "C" };
        assert_eq!(e.to_string(), r#"no path from "A" to "C""#);
        let e: GraphError<u8> = GraphError::InvalidWeight {
            from: 1,
            to: 2,
            weight: "-3".to_owned(),
        };
        assert_eq!(e.to_string(), "invalid weight -3 on edge 1 -- 2");
    }

    #[test]
    fn map_node_renames_every_mention() {
        let e: GraphError<usize> = GraphError::NoPath { from: 0, to: 1 };
        let names = ["A", "B"];
        assert_eq!(
            e.map_node(|i| names[i]),
            GraphError::NoPath { from: "A", to: "B" }
        );
        let e: GraphError<usize> = GraphError::EmptyGraph;
        assert_eq!(e.map_node(|i| names[i]), GraphError::EmptyGraph);
    }
}
