//! Graph storage: low-level ids, edges, the node arena and labeled graphs.
//!
//! # Low-level graphs
//!
//! [NodeRegistry] keeps every node in a slot together with its adjacency list.
//! Vertices and edges in it are lightweight ids, essentially `usize`,
//! so algorithm authors may feel free to copy and store them.
//! It implements [QueryableGraph], the interface every algorithm in [crate::algorithm] runs on.
//!
//! # Labeled graphs
//!
//! [DirectedGraph] and [WeightedGraph] wrap a registry and name nodes by user labels.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod weight;
pub use self::weight::*;
mod registry;
pub use self::registry::*;
mod directed;
pub use self::directed::*;
mod weighted;
pub use self::weighted::*;
