use crate::{algorithm::*, error::*, graph::*};
use log::debug;
use std::hash::Hash;

/// A directed unweighted graph whose nodes are named by labels.
///
/// Adjacency lists keep insertion order and may hold parallel edges.
///
/// |                      | Complexity                       |
/// | -------------------- | -------------------------------- |
/// | `add_node`           | amortized $O(1)$                 |
/// | `add_edge`           | amortized $O(1)$                 |
/// | `remove_node`        | $O(\|V\| + \|E\|)$               |
/// | `remove_edge`        | $O(K)$, where $K$ is the out-degree of `from` |
/// | `dfs_*`, `bfs`       | $O(\|V\| + \|E\|)$               |
/// | `topological_sort*`  | $O(\|V\| + \|E\|)$               |
/// | `has_cycle*`         | $O(\|V\| + \|E\|)$               |
#[derive(Clone)]
pub struct DirectedGraph<L>
where
    L: Hash + Eq,
{
    eid_factory: EdgeIdFactory,
    nodes: NodeRegistry<L, Edge>,
}

impl<L> Default for DirectedGraph<L>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> std::fmt::Debug for DirectedGraph<L>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DirectedGraph {{")?;
        for (_, slot) in self.nodes.iter() {
            writeln!(f, "{:?}:", slot.label)?;
            for e in slot.edges.iter() {
                writeln!(f, "  -> {:?}", self.nodes[&e.sink])?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<L> DirectedGraph<L>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            eid_factory: EdgeIdFactory::new(),
            nodes: NodeRegistry::with_capacity(nodes),
        }
    }

    /// The underlying arena, on which algorithms in [crate::algorithm] run directly.
    pub fn lower_graph(&self) -> &NodeRegistry<L, Edge> {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.edge_size()
    }

    pub fn contains_node(&self, label: &L) -> bool {
        self.nodes.id_of(label).is_some()
    }

    pub fn contains_edge(&self, from: &L, to: &L) -> bool {
        match (self.nodes.id_of(from), self.nodes.id_of(to)) {
            (Some(from), Some(to)) => self.nodes.edges(&from).iter().any(|e| e.sink == to),
            _ => false,
        }
    }

    /// Labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &L> + '_ {
        self.nodes.iter().map(|(_, slot)| &slot.label)
    }

    /// Sinks of out-edges of a node, in the order the edges were added.
    pub fn neighbors(&self, label: &L) -> Result<impl Iterator<Item = &L> + '_, L> {
        let vid = self.nodes.require(label)?;
        Ok(self.nodes.edges(&vid).iter().map(move |e| &self.nodes[&e.sink]))
    }

    /// Every edge as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L)> + '_ {
        self.nodes.iter().flat_map(move |(_, slot)| {
            slot.edges
                .iter()
                .map(move |e| (&slot.label, &self.nodes[&e.sink]))
        })
    }

    /// Fails with [GraphError::DuplicateNode] if the label is already present.
    pub fn add_node(&mut self, label: L) -> Result<(), L> {
        self.nodes.insert(label).map(|_| ())
    }

    /// Appends an edge to the adjacency list of `from`.
    ///
    /// Adding the same pair twice makes parallel edges.
    pub fn add_edge(&mut self, from: &L, to: &L) -> Result<(), L> {
        let source = self.nodes.require(from)?;
        let sink = self.nodes.require(to)?;
        let id = self.eid_factory.one_more();
        self.nodes.push_edge(Edge { id, source, sink });
        debug!("added edge {:?} -> {:?}", from, to);
        Ok(())
    }

    /// Removes a node and every edge going into or out of it.
    pub fn remove_node(&mut self, label: &L) -> Result<(), L> {
        self.nodes.remove(label).map(|_| ())
    }

    /// Removes the first edge from `from` to `to`.
    ///
    /// Returns whether there was one.
    pub fn remove_edge(&mut self, from: &L, to: &L) -> Result<bool, L> {
        let source = self.nodes.require(from)?;
        let sink = self.nodes.require(to)?;
        let removed = self.nodes.remove_edge(&source, |e| e.sink == sink).is_some();
        if removed {
            debug!("removed edge {:?} -> {:?}", from, to);
        }
        Ok(removed)
    }

    /// Depth-first traversal from `root` on the call stack.
    pub fn dfs_recursive(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .dfs_recursive(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    /// Depth-first traversal from `root` on an explicit stack.
    /// The order is the same as [DirectedGraph::dfs_recursive].
    pub fn dfs_iterative(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .dfs_iterative(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    /// Breadth-first traversal from `root`.
    pub fn bfs(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .bfs(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    /// Orders nodes so that every edge goes forward.
    ///
    /// Fails with [GraphError::Cycle] if there is a cycle.
    pub fn topological_sort(&self) -> Result<Vec<&L>, L> {
        self.nodes
            .toposort()
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    /// [DirectedGraph::topological_sort] on the call stack.
    pub fn topological_sort_recursive(&self) -> Result<Vec<&L>, L> {
        self.nodes
            .toposort_recursive()
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    pub fn has_cycle(&self) -> bool {
        self.nodes.has_directed_cycle()
    }

    pub fn has_cycle_recursive(&self) -> bool {
        self.nodes.has_directed_cycle_recursive()
    }
}

#[cfg(test)]
impl DirectedGraph<u8> {
    /// Applies random operations, ignoring the failing ones.
    pub(crate) fn from_ops(ops: &crate::algorithm::testing::Ops) -> Self {
        use crate::algorithm::testing::Op;
        let mut g = Self::new();
        for op in ops.iter() {
            let _ = match op {
                Op::AddNode(a) => g.add_node(*a),
                Op::RemoveNode(a) => g.remove_node(a),
                Op::AddEdge(a, b, _) => g.add_edge(a, b),
                Op::RemoveEdge(a, b) => g.remove_edge(a, b).map(|_| ()),
            };
        }
        g
    }
}
