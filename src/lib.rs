//! Labeled graphs and their algorithms.
//!
//! # Labels and low-level ids
//!
//! Users name nodes by labels of their own type.
//! Internally every graph keeps its nodes in an arena and refers to them by [`graph::VertexId`],
//! which is essentially a `usize` slot index.
//! Edges store these ids rather than references,
//! so removing a node can never leave a dangling reference behind.
//!
//! Algorithms are written once against [`graph::QueryableGraph`] and work on low-level ids.
//! The labeled graphs translate labels to ids on the way in and back on the way out.
//!
//! # Graphs
//!
//! * [`graph::DirectedGraph`]: unweighted, directed, parallel edges allowed.
//! * [`graph::WeightedGraph`]: undirected with non-negative integer weights.
//!   Each edge is stored as two mirrored adjacency entries.
//!
//! ```
//! use lgraph::graph::*;
//!
//! let mut g = WeightedGraph::<&str>::new();
//! for v in ["A", "B", "C"] {
//!     g.add_node(v).unwrap();
//! }
//! g.add_edge(&"A", &"B", 1).unwrap();
//! g.add_edge(&"B", &"C", 2).unwrap();
//! g.add_edge(&"A", &"C", 4).unwrap();
//! let path = g.get_shortest_distance(&"A", &"C").unwrap();
//! assert_eq!(path.distance, 3);
//! assert_eq!(path.nodes, vec![&"A", &"B", &"C"]);
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;

pub use self::error::{GraphError, Result};
