use super::{VisitMap, VisitState};
use crate::{error::*, graph::*};
use log::debug;

/// Cycle detection on directed graphs by three-state coloring.
///
/// A cycle exists iff some edge goes into an `InProgress` vertex, i.e., a back-edge.
/// $O(\|V\| + \|E\|)$.
pub trait DirectedCycle
where
    Self: QueryableGraph + Sized,
{
    fn has_directed_cycle(&self) -> bool {
        colored_dfs(self, |_| {}).is_err()
    }

    fn has_directed_cycle_recursive(&self) -> bool {
        colored_dfs_recursive(self, |_| {}).is_err()
    }
}

impl<G: QueryableGraph> DirectedCycle for G {}

/// Cycle detection on undirected graphs, where every edge is stored as two mirrored entries.
///
/// Each vertex remembers the edge it was reached through.
/// Meeting an already visited vertex through any other edge closes a cycle.
/// Because edges rather than vertices are remembered,
/// parallel edges and self-loops count as cycles.
pub trait UndirectedCycle
where
    Self: QueryableGraph + Sized,
{
    fn has_undirected_cycle(&self) -> bool {
        let mut state = VisitMap::new(self);
        for start in self.iter_vertices() {
            if state.get(&start) != VisitState::Unvisited {
                continue;
            }
            state.set(&start, VisitState::InProgress);
            let mut stack = vec![(start, None, self.out_edges(&start))];
            loop {
                let (next, parent) = match stack.last_mut() {
                    Some((_, parent, edges)) => (edges.next(), *parent),
                    None => break,
                };
                match next {
                    Some(e) if Some(e.id) == parent => {}
                    Some(e) => {
                        if state.get(&e.sink) != VisitState::Unvisited {
                            debug!("cycle closed by {:?}", e);
                            return true;
                        }
                        state.set(&e.sink, VisitState::InProgress);
                        stack.push((e.sink, Some(e.id), self.out_edges(&e.sink)));
                    }
                    None => {
                        if let Some((v, _, _)) = stack.pop() {
                            state.set(&v, VisitState::Done);
                        }
                    }
                }
            }
        }
        false
    }

    fn has_undirected_cycle_recursive(&self) -> bool {
        let mut state = VisitMap::new(self);
        for start in self.iter_vertices() {
            if state.get(&start) == VisitState::Unvisited
                && undirected_visit(self, start, None, &mut state)
            {
                return true;
            }
        }
        false
    }
}

impl<G: QueryableGraph> UndirectedCycle for G {}

fn undirected_visit<G: QueryableGraph>(
    graph: &G,
    v: VertexId,
    parent: Option<EdgeId>,
    state: &mut VisitMap,
) -> bool {
    state.set(&v, VisitState::InProgress);
    for e in graph.out_edges(&v) {
        if Some(e.id) == parent {
            continue;
        }
        if state.get(&e.sink) != VisitState::Unvisited {
            debug!("cycle closed by {:?}", e);
            return true;
        }
        if undirected_visit(graph, e.sink, Some(e.id), state) {
            return true;
        }
    }
    state.set(&v, VisitState::Done);
    false
}

/// Colors every vertex by DFS from each unvisited vertex in insertion order.
///
/// `on_done` sees vertices in post-order, i.e., after all their descendants.
/// Fails with [GraphError::Cycle] at the sink of the first back-edge.
pub(crate) fn colored_dfs<G, F>(graph: &G, mut on_done: F) -> Result<(), VertexId>
where
    G: QueryableGraph,
    F: FnMut(VertexId),
{
    let mut state = VisitMap::new(graph);
    for start in graph.iter_vertices() {
        if state.get(&start) != VisitState::Unvisited {
            continue;
        }
        state.set(&start, VisitState::InProgress);
        let mut stack = vec![(start, graph.out_edges(&start))];
        loop {
            let next = match stack.last_mut() {
                Some((_, edges)) => edges.next(),
                None => break,
            };
            match next {
                Some(e) => match state.get(&e.sink) {
                    VisitState::Unvisited => {
                        state.set(&e.sink, VisitState::InProgress);
                        stack.push((e.sink, graph.out_edges(&e.sink)));
                    }
                    VisitState::InProgress => {
                        debug!("back-edge {:?}", e);
                        return Err(GraphError::Cycle(e.sink));
                    }
                    VisitState::Done => {}
                },
                None => {
                    if let Some((v, _)) = stack.pop() {
                        state.set(&v, VisitState::Done);
                        on_done(v);
                    }
                }
            }
        }
    }
    Ok(())
}

/// The same as [colored_dfs] on the call stack.
pub(crate) fn colored_dfs_recursive<G, F>(graph: &G, mut on_done: F) -> Result<(), VertexId>
where
    G: QueryableGraph,
    F: FnMut(VertexId),
{
    let mut state = VisitMap::new(graph);
    for start in graph.iter_vertices() {
        if state.get(&start) == VisitState::Unvisited {
            colored_visit(graph, start, &mut state, &mut on_done)?;
        }
    }
    Ok(())
}

fn colored_visit<G, F>(
    graph: &G,
    v: VertexId,
    state: &mut VisitMap,
    on_done: &mut F,
) -> Result<(), VertexId>
where
    G: QueryableGraph,
    F: FnMut(VertexId),
{
    state.set(&v, VisitState::InProgress);
    for e in graph.out_edges(&v) {
        match state.get(&e.sink) {
            VisitState::Unvisited => colored_visit(graph, e.sink, state, on_done)?,
            VisitState::InProgress => {
                debug!("back-edge {:?}", e);
                return Err(GraphError::Cycle(e.sink));
            }
            VisitState::Done => {}
        }
    }
    state.set(&v, VisitState::Done);
    on_done(v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::graph::{DirectedGraph, WeightedGraph};
    use petgraph::{
        algo::{is_cyclic_directed, is_cyclic_undirected},
        Graph, Undirected,
    };
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    #[test]
    fn directed_self_loop() {
        let mut g = DirectedGraph::new();
        g.add_node(0).unwrap();
        assert!(!g.lower_graph().has_directed_cycle());
        g.add_edge(&0, &0).unwrap();
        assert!(g.lower_graph().has_directed_cycle());
        assert!(g.lower_graph().has_directed_cycle_recursive());
    }

    #[test]
    fn diamond_is_acyclic() {
        let mut g = DirectedGraph::new();
        for v in 0..4 {
            g.add_node(v).unwrap();
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            g.add_edge(&a, &b).unwrap();
        }
        assert!(!g.lower_graph().has_directed_cycle());
        assert!(!g.lower_graph().has_directed_cycle_recursive());
    }

    #[test]
    fn undirected_diamond_is_cyclic() {
        let mut g = WeightedGraph::<u8>::new();
        for v in 0..4 {
            g.add_node(v).unwrap();
        }
        for (a, b) in [(0, 1), (0, 2), (1, 3)] {
            g.add_edge(&a, &b, 1).unwrap();
        }
        assert!(!g.lower_graph().has_undirected_cycle());
        assert!(!g.lower_graph().has_undirected_cycle_recursive());
        g.add_edge(&2, &3, 1).unwrap();
        assert!(g.lower_graph().has_undirected_cycle());
        assert!(g.lower_graph().has_undirected_cycle_recursive());
    }

    #[test]
    fn undirected_parallel_edges() {
        let mut g = WeightedGraph::<u8>::new();
        g.add_node(0).unwrap();
        g.add_node(1).unwrap();
        g.add_edge(&0, &1, 1).unwrap();
        assert!(!g.lower_graph().has_undirected_cycle());
        assert!(!g.lower_graph().has_undirected_cycle_recursive());
        g.add_edge(&1, &0, 2).unwrap();
        assert!(g.lower_graph().has_undirected_cycle());
        assert!(g.lower_graph().has_undirected_cycle_recursive());
    }

    #[test]
    fn undirected_self_loop() {
        let mut g = WeightedGraph::<u8>::new();
        g.add_node(0).unwrap();
        g.add_edge(&0, &0, 0).unwrap();
        assert!(g.lower_graph().has_undirected_cycle());
        assert!(g.lower_graph().has_undirected_cycle_recursive());
    }

    #[quickcheck]
    fn directed_cycles_agree_with_petgraph(ops: Ops) {
        init_logger();
        let g = DirectedGraph::from_ops(&ops);
        let lower = g.lower_graph();
        let mut oracle = Graph::<(), ()>::new();
        let idx: HashMap<_, _> = lower
            .iter_vertices()
            .map(|v| (v, oracle.add_node(())))
            .collect();
        for v in lower.iter_vertices() {
            for e in lower.out_edges(&v) {
                oracle.add_edge(idx[&e.source], idx[&e.sink], ());
            }
        }
        let expected = is_cyclic_directed(&oracle);
        assert_eq!(lower.has_directed_cycle(), expected);
        assert_eq!(lower.has_directed_cycle_recursive(), expected);
    }

    #[quickcheck]
    fn undirected_cycles_agree_with_petgraph(ops: Ops) {
        init_logger();
        let g = WeightedGraph::from_ops(&ops);
        let mut oracle = Graph::<(), (), Undirected>::new_undirected();
        let idx: HashMap<_, _> = g.nodes().map(|v| (*v, oracle.add_node(()))).collect();
        for (a, b, _) in g.edges() {
            oracle.add_edge(idx[a], idx[b], ());
        }
        let expected = is_cyclic_undirected(&oracle);
        assert_eq!(g.lower_graph().has_undirected_cycle(), expected);
        assert_eq!(g.lower_graph().has_undirected_cycle_recursive(), expected);
    }
}
