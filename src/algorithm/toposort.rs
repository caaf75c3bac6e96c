use super::cycle::{colored_dfs, colored_dfs_recursive};
use crate::{error::*, graph::*};

/// Topological sort by post-order DFS.
///
/// A vertex is pushed onto the output only after all of its descendants are done.
/// Reversing the output gives an order where every edge goes forward.
/// Fails with [GraphError::Cycle] if the graph is cyclic.
pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Sorts on an explicit stack.
    fn toposort(&self) -> Result<Vec<VertexId>, VertexId> {
        let mut postorder = Vec::with_capacity(self.vertex_size());
        colored_dfs(self, |v| postorder.push(v))?;
        postorder.reverse();
        Ok(postorder)
    }

    /// Sorts on the call stack, with exactly the same result as [TopologicalSort::toposort].
    fn toposort_recursive(&self) -> Result<Vec<VertexId>, VertexId> {
        let mut postorder = Vec::with_capacity(self.vertex_size());
        colored_dfs_recursive(self, |v| postorder.push(v))?;
        postorder.reverse();
        Ok(postorder)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

#[cfg(test)]
mod tests {
    use super::super::{testing::*, DirectedCycle};
    use super::*;
    use crate::graph::DirectedGraph;
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    #[test]
    fn empty_graph_sorts_trivially() {
        let g = DirectedGraph::<u8>::new();
        assert_eq!(g.lower_graph().toposort(), Ok(vec![]));
    }

    #[test]
    fn cycle_is_reported_at_a_vertex_on_it() {
        let mut g = DirectedGraph::new();
        for v in ["A", "B", "C", "D"] {
            g.add_node(v).unwrap();
        }
        g.add_edge(&"D", &"A").unwrap();
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"B", &"C").unwrap();
        g.add_edge(&"C", &"A").unwrap();
        let lower = g.lower_graph();
        let a = lower.id_of(&"A").unwrap();
        assert_eq!(lower.toposort(), Err(GraphError::Cycle(a)));
        assert_eq!(lower.toposort_recursive(), Err(GraphError::Cycle(a)));
    }

    #[quickcheck]
    fn toposort_orders_every_edge_forward(ops: Ops) {
        init_logger();
        let mut g = DirectedGraph::from_ops(&ops);
        // break cycles by dropping back-edges until none is left
        while let Err(GraphError::Cycle(v)) = g.lower_graph().toposort() {
            let label = g.lower_graph()[&v];
            let from = g
                .lower_graph()
                .iter()
                .find(|(_, slot)| slot.edges.iter().any(|e| e.sink == v))
                .map(|(_, slot)| slot.label);
            match from {
                Some(from) => {
                    assert!(g.remove_edge(&from, &label).unwrap());
                }
                None => panic!("{:?} is on a cycle without in-edges", v),
            }
        }
        let lower = g.lower_graph();
        assert!(!lower.has_directed_cycle());
        let order = lower.toposort().unwrap();
        assert_eq!(order, lower.toposort_recursive().unwrap());
        assert_eq!(order.len(), lower.vertex_size());
        let pos: HashMap<_, _> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        for v in lower.iter_vertices() {
            for e in lower.out_edges(&v) {
                assert!(pos[&e.source] < pos[&e.sink], "{:?}", e);
            }
        }
    }
}
