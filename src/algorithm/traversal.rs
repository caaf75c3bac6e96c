use super::{check_root, VisitMap, VisitState};
use crate::{error::*, graph::*};
use std::collections::VecDeque;

/// Depth-first and breadth-first traversals from a root.
///
/// Each returns the vertices reachable from the root, each exactly once, in visiting order.
/// Neighbors are explored in the order of their adjacency lists.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    /// Depth-first traversal on the call stack.
    ///
    /// Deep graphs may exhaust the call stack. See [Traversal::dfs_iterative].
    fn dfs_recursive(&self, root: &VertexId) -> Result<Vec<VertexId>, VertexId> {
        check_root(self, root)?;
        let mut state = VisitMap::new(self);
        let mut order = Vec::with_capacity(self.vertex_size());
        dfs_visit(self, *root, &mut state, &mut order);
        Ok(order)
    }

    /// Depth-first traversal on an explicit stack.
    ///
    /// It visits vertices in exactly the same order as [Traversal::dfs_recursive].
    fn dfs_iterative(&self, root: &VertexId) -> Result<Vec<VertexId>, VertexId> {
        check_root(self, root)?;
        let mut state = VisitMap::new(self);
        let mut order = vec![*root];
        state.set(root, VisitState::InProgress);
        // each frame keeps the rest of the adjacency list to explore
        let mut stack = vec![(*root, self.out_edges(root))];
        loop {
            let next = match stack.last_mut() {
                Some((_, edges)) => edges.next(),
                None => break,
            };
            match next {
                Some(e) => {
                    if state.get(&e.sink) == VisitState::Unvisited {
                        state.set(&e.sink, VisitState::InProgress);
                        order.push(e.sink);
                        stack.push((e.sink, self.out_edges(&e.sink)));
                    }
                }
                None => {
                    if let Some((v, _)) = stack.pop() {
                        state.set(&v, VisitState::Done);
                    }
                }
            }
        }
        Ok(order)
    }

    /// Breadth-first traversal.
    ///
    /// Vertices come in non-decreasing hop count from the root.
    fn bfs(&self, root: &VertexId) -> Result<Vec<VertexId>, VertexId> {
        check_root(self, root)?;
        let mut state = VisitMap::new(self);
        let mut order = Vec::with_capacity(self.vertex_size());
        let mut frontier = VecDeque::new();
        state.set(root, VisitState::InProgress);
        frontier.push_back(*root);
        while let Some(v) = frontier.pop_front() {
            order.push(v);
            for e in self.out_edges(&v) {
                if state.get(&e.sink) == VisitState::Unvisited {
                    state.set(&e.sink, VisitState::InProgress);
                    frontier.push_back(e.sink);
                }
            }
            state.set(&v, VisitState::Done);
        }
        Ok(order)
    }
}

impl<G: QueryableGraph> Traversal for G {}

fn dfs_visit<G: QueryableGraph>(
    graph: &G,
    v: VertexId,
    state: &mut VisitMap,
    order: &mut Vec<VertexId>,
) {
    state.set(&v, VisitState::InProgress);
    order.push(v);
    for e in graph.out_edges(&v) {
        if state.get(&e.sink) == VisitState::Unvisited {
            dfs_visit(graph, e.sink, state, order);
        }
    }
    state.set(&v, VisitState::Done);
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::graph::DirectedGraph;
    use petgraph::{visit::Bfs, Graph};
    use quickcheck_macros::quickcheck;
    use std::collections::{BTreeSet, HashMap};

    fn chain(n: usize) -> DirectedGraph<usize> {
        let mut g = DirectedGraph::new();
        for i in 0..n {
            g.add_node(i).unwrap();
        }
        for i in 1..n {
            g.add_edge(&(i - 1), &i).unwrap();
        }
        g
    }

    #[test]
    fn dfs_follows_adjacency_order() {
        let mut g = DirectedGraph::new();
        for v in ["A", "B", "C", "D", "E"] {
            g.add_node(v).unwrap();
        }
        g.add_edge(&"A", &"C").unwrap();
        g.add_edge(&"A", &"B").unwrap();
        g.add_edge(&"C", &"D").unwrap();
        g.add_edge(&"B", &"D").unwrap();
        g.add_edge(&"D", &"A").unwrap();
        let lower = g.lower_graph();
        let root = lower.id_of(&"A").unwrap();
        let labels = |vs: Vec<VertexId>| vs.iter().map(|v| lower[v]).collect::<Vec<_>>();
        assert_eq!(
            labels(lower.dfs_recursive(&root).unwrap()),
            vec!["A", "C", "D", "B"]
        );
        assert_eq!(
            labels(lower.dfs_iterative(&root).unwrap()),
            vec!["A", "C", "D", "B"]
        );
        assert_eq!(labels(lower.bfs(&root).unwrap()), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn iterative_dfs_survives_deep_chains() {
        let g = chain(200_000);
        let lower = g.lower_graph();
        let root = lower.id_of(&0).unwrap();
        assert_eq!(lower.dfs_iterative(&root).unwrap().len(), 200_000);
    }

    #[test]
    fn root_errors() {
        let g = DirectedGraph::<u8>::new();
        assert_eq!(
            g.lower_graph().bfs(&VertexId::new(0)),
            Err(GraphError::EmptyGraph)
        );
        let g = chain(2);
        assert_eq!(
            g.lower_graph().dfs_recursive(&VertexId::new(9)),
            Err(GraphError::UnknownNode(VertexId::new(9)))
        );
    }

    #[quickcheck]
    fn traversals_visit_reachable_vertices_once(ops: Ops) {
        init_logger();
        let g = DirectedGraph::from_ops(&ops);
        let lower = g.lower_graph();

        let mut oracle = Graph::<VertexId, ()>::new();
        let mut idx = HashMap::new();
        for v in lower.iter_vertices() {
            idx.insert(v, oracle.add_node(v));
        }
        for v in lower.iter_vertices() {
            for e in lower.out_edges(&v) {
                oracle.add_edge(idx[&e.source], idx[&e.sink], ());
            }
        }

        for root in lower.iter_vertices() {
            let mut reachable = BTreeSet::new();
            let mut bfs = Bfs::new(&oracle, idx[&root]);
            while let Some(n) = bfs.next(&oracle) {
                reachable.insert(oracle[n]);
            }

            let rec = lower.dfs_recursive(&root).unwrap();
            let iter = lower.dfs_iterative(&root).unwrap();
            let breadth = lower.bfs(&root).unwrap();
            assert_eq!(rec, iter);
            assert_eq!(rec[0], root);
            assert_eq!(breadth[0], root);
            for trial in [&rec, &breadth] {
                assert_eq!(trial.len(), reachable.len());
                assert_eq!(trial.iter().copied().collect::<BTreeSet<_>>(), reachable);
            }

            let hops = petgraph::algo::dijkstra(&oracle, idx[&root], None, |_| 1usize);
            let hops: Vec<usize> = breadth
                .iter()
                .map(|v| hops[&idx[v]])
                .collect();
            assert!(hops.windows(2).all(|w| w[0] <= w[1]), "{:?}", hops);
        }
    }
}
