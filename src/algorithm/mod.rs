//! Graph algorithms
//!
//! All of them run on low-level graphs, i.e., implementations of [QueryableGraph],
//! and are provided as traits with blanket implementations.
use crate::{error::*, graph::*};

mod traversal;
pub use self::traversal::*;
mod cycle;
pub use self::cycle::*;
mod toposort;
pub use self::toposort::*;
mod shortest_path;
pub use self::shortest_path::*;

/// States of a vertex during a single traversal.
///
/// A vertex goes `Unvisited -> InProgress -> Done`.
/// `InProgress` vertices form the current path from the root,
/// so only edges into them can close a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Per-vertex [VisitState], indexed by slot.
pub(crate) struct VisitMap(Vec<VisitState>);

impl VisitMap {
    pub(crate) fn new<G: QueryableGraph>(graph: &G) -> Self {
        Self(vec![VisitState::Unvisited; graph.vertex_bound()])
    }

    pub(crate) fn get(&self, v: &VertexId) -> VisitState {
        self.0[v.to_raw()]
    }

    pub(crate) fn set(&mut self, v: &VertexId, state: VisitState) {
        self.0[v.to_raw()] = state;
    }
}

/// Traversals and searches need a root in a non-empty graph.
pub(crate) fn check_root<G: QueryableGraph>(graph: &G, root: &VertexId) -> Result<(), VertexId> {
    if graph.vertex_size() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if !graph.contains_vertex(root) {
        return Err(GraphError::UnknownNode(*root));
    }
    Ok(())
}

/// Shared helpers for property tests: random operation sequences over small labels.
#[cfg(test)]
pub(crate) mod testing {
    use quickcheck::Arbitrary;
    use rs_quickcheck_util::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Op {
        AddNode(u8),
        RemoveNode(u8),
        AddEdge(u8, u8, u8),
        RemoveEdge(u8, u8),
    }

    /// Labels are drawn from a small range so that duplicates and unknown labels happen.
    pub const LABELS: u8 = 8;

    #[derive(Clone)]
    pub struct Ops {
        pub ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.ops)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }
    }

    impl Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let ops = gen_bytes(g, b"abcd.", b'.', 0..)
                .iter()
                .map(|_| {
                    let a = u8::arbitrary(g) % LABELS;
                    let b = u8::arbitrary(g) % LABELS;
                    // node additions dominate so that graphs get populated
                    match u8::arbitrary(g) % 8 {
                        0..=2 => Op::AddNode(a),
                        3 => Op::RemoveNode(a),
                        4..=6 => Op::AddEdge(a, b, u8::arbitrary(g) % 10),
                        7 => Op::RemoveEdge(a, b),
                        _ => unreachable!(),
                    }
                })
                .collect();
            Self { ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| Ops {
                ops: me.ops[0..n].to_vec(),
            });
            Box::new(it)
        }
    }

    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
