use crate::{algorithm::*, error::*, graph::*};
use ahash::RandomState;
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

/// An undirected graph with non-negative weights, whose nodes are named by labels.
///
/// Every edge is stored as two mirrored adjacency entries sharing one [EdgeId],
/// which are always added and removed together.
///
/// |                         | Complexity                                  |
/// | ----------------------- | ------------------------------------------- |
/// | `add_node`              | amortized $O(1)$                            |
/// | `add_edge`              | amortized $O(1)$                            |
/// | `remove_node`           | $O(\|V\| + \|E\|)$                          |
/// | `remove_edge`           | $O(K)$, where $K$ is the degree of the endpoints |
/// | `get_shortest_distance` | $O((\|V\| + \|E\|) \log \|V\|)$             |
/// | `has_cycle*`            | $O(\|V\| + \|E\|)$                          |
#[derive(Clone)]
pub struct WeightedGraph<L, W = i64>
where
    L: Hash + Eq,
{
    eid_factory: EdgeIdFactory,
    nodes: NodeRegistry<L, WeightedEdge<W>>,
}

impl<L, W> Default for WeightedGraph<L, W>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> std::fmt::Debug for WeightedGraph<L, W>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        for (_, slot) in self.nodes.iter() {
            writeln!(f, "{:?}:", slot.label)?;
            for e in slot.edges.iter() {
                writeln!(f, "  -- {:?} ({})", self.nodes[&e.sink], e.weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<L, W> WeightedGraph<L, W>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    W: Weight,
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
    pub fn lower_graph(&self) -> &NodeRegistry<L, WeightedEdge<W>> {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, each mirrored pair counted once.
    pub fn edge_count(&self) -> usize {
        self.nodes.edge_size() / 2
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

    /// Adjacent nodes with weights of the connecting edges, in the order the edges were added.
    pub fn neighbors(&self, label: &L) -> Result<impl Iterator<Item = (&L, W)> + '_, L> {
        let vid = self.nodes.require(label)?;
        Ok(self
            .nodes
            .edges(&vid)
            .iter()
            .map(move |e| (&self.nodes[&e.sink], e.weight)))
    }

    /// Every edge once as `(from, to, weight)`,
    /// `from` being whichever endpoint was added to the graph earlier.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, W)> + '_ {
        let mut seen = HashSet::with_hasher(RandomState::new());
        self.nodes
            .iter()
            .flat_map(|(_, slot)| slot.edges.iter())
            .filter(move |e| seen.insert(e.id))
            .map(move |e| (&self.nodes[&e.source], &self.nodes[&e.sink], e.weight))
    }

    /// Fails with [GraphError::DuplicateNode] if the label is already present.
    pub fn add_node(&mut self, label: L) -> Result<(), L> {
        self.nodes.insert(label).map(|_| ())
    }

    /// Connects `from` and `to` in both directions with the same weight.
    ///
    /// Fails with [GraphError::InvalidWeight] on negative weights.
    pub fn add_edge(&mut self, from: &L, to: &L, weight: W) -> Result<(), L> {
        let source = self.nodes.require(from)?;
        let sink = self.nodes.require(to)?;
        if weight.is_negative() {
            return Err(GraphError::InvalidWeight {
                from: from.clone(),
                to: to.clone(),
                weight: weight.to_string(),
            });
        }
        let edge = WeightedEdge {
            id: self.eid_factory.one_more(),
            source,
            sink,
            weight,
        };
        self.nodes.push_edge(edge);
        self.nodes.push_edge(edge.mirrored());
        debug!("added edge {:?} -- {:?} ({})", from, to, weight);
        Ok(())
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, label: &L) -> Result<(), L> {
        self.nodes.remove(label).map(|_| ())
    }

    /// Removes the first edge between `from` and `to`, both of its entries.
    ///
    /// Returns whether there was one.
    pub fn remove_edge(&mut self, from: &L, to: &L) -> Result<bool, L> {
        let source = self.nodes.require(from)?;
        let sink = self.nodes.require(to)?;
        let id = match self.nodes.edges(&source).iter().find(|e| e.sink == sink) {
            Some(e) => e.id,
            None => return Ok(false),
        };
        self.nodes.remove_edges_by_id(&source, id);
        if sink != source {
            self.nodes.remove_edges_by_id(&sink, id);
        }
        debug!("removed edge {:?} -- {:?}", from, to);
        Ok(true)
    }

    pub fn dfs_recursive(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .dfs_recursive(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    pub fn dfs_iterative(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .dfs_iterative(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    pub fn bfs(&self, root: &L) -> Result<Vec<&L>, L> {
        let root = self.nodes.root(root)?;
        self.nodes
            .bfs(&root)
            .map(|vs| self.nodes.labels(vs))
            .map_err(|e| self.nodes.relabel(e))
    }

    pub fn has_cycle(&self) -> bool {
        self.nodes.has_undirected_cycle()
    }

    pub fn has_cycle_recursive(&self) -> bool {
        self.nodes.has_undirected_cycle_recursive()
    }

    /// Shortest path from `from` to `to` by Dijkstra's algorithm.
    ///
    /// Fails with [GraphError::NoPath] if `to` is unreachable.
    pub fn get_shortest_distance(&self, from: &L, to: &L) -> Result<Path<&L>, L> {
        let source = self.nodes.root(from)?;
        let sink = self.nodes.require(to)?;
        let path = self
            .nodes
            .shortest_path(&source, &sink)
            .map_err(|e| self.nodes.relabel(e))?;
        Ok(Path {
            nodes: self.nodes.labels(path.nodes),
            distance: path.distance,
        })
    }

    /// Shortest paths from `from` to every reachable node.
    ///
    /// Paths are then reconstructed by [WeightedGraph::build_path].
    pub fn shortest_path_tree(&self, from: &L) -> Result<ShortestPathTree, L> {
        let source = self.nodes.root(from)?;
        self.nodes
            .dijkstra(&source, None)
            .map_err(|e| self.nodes.relabel(e))
    }

    /// Reconstructs the path to `to` from a tree computed on this graph.
    ///
    /// Fails with [GraphError::NoPath] if `to` was never reached,
    /// and with [GraphError::OutdatedTree] if a node the tree passes through is gone.
    pub fn build_path(&self, to: &L, tree: &ShortestPathTree) -> Result<Path<&L>, L> {
        let sink = self.nodes.require(to)?;
        let from = self
            .nodes
            .label_of(&tree.source())
            .ok_or(GraphError::OutdatedTree)?;
        let path = tree.path_to(&sink).map_err(|_| GraphError::NoPath {
            from: from.clone(),
            to: to.clone(),
        })?;
        let nodes = path
            .nodes
            .iter()
            .map(|v| self.nodes.label_of(v))
            .collect::<Option<Vec<_>>>()
            .ok_or(GraphError::OutdatedTree)?;
        Ok(Path {
            nodes,
            distance: path.distance,
        })
    }
}

#[cfg(test)]
impl WeightedGraph<u8> {
    /// Applies random operations, ignoring the failing ones.
    pub(crate) fn from_ops(ops: &crate::algorithm::testing::Ops) -> Self {
        use crate::algorithm::testing::Op;
        let mut g = Self::new();
        for op in ops.iter() {
            let _ = match op {
                Op::AddNode(a) => g.add_node(*a),
                Op::RemoveNode(a) => g.remove_node(a),
                Op::AddEdge(a, b, w) => g.add_edge(a, b, *w as i64),
                Op::RemoveEdge(a, b) => g.remove_edge(a, b).map(|_| ()),
            };
        }
        g
    }
}
