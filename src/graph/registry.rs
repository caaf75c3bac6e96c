use crate::{error::*, graph::*};
use ahash::RandomState;
use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

/// A node and its adjacency list.
///
/// They live in one slot, so a node can never exist without its adjacency list or vice versa.
#[derive(Debug, Clone)]
pub struct NodeSlot<L, E> {
    pub label: L,
    pub edges: Vec<E>,
}

/// An arena of nodes keyed by labels.
///
/// | Operation     | Complexity                                        |
/// | ------------- | ------------------------------------------------- |
/// | `insert`      | amortized $O(1)$                                  |
/// | `remove`      | $O(\|V\| + \|E\|)$, every adjacency list is scanned |
/// | `id_of`       | $O(1)$                                            |
/// | `push_edge`   | amortized $O(1)$                                  |
/// | `remove_edge` | $O(K)$, where $K$ is the degree of the vertex     |
///
/// Slots of removed nodes stay behind as tombstones,
/// so a [VertexId] keeps naming the same node for the whole life of the registry.
#[derive(Clone)]
pub struct NodeRegistry<L, E>
where
    L: Hash + Eq,
{
    slots: Vec<Option<NodeSlot<L, E>>>,
    index: HashMap<L, VertexId, RandomState>,
    entry_size: usize,
}

impl<L, E> Default for NodeRegistry<L, E>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, E> NodeRegistry<L, E>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            slots: Vec::with_capacity(nodes),
            index: HashMap::with_capacity_and_hasher(nodes, RandomState::new()),
            entry_size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn id_of(&self, label: &L) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Like [NodeRegistry::id_of] but fails with [GraphError::UnknownNode].
    pub fn require(&self, label: &L) -> Result<VertexId, L> {
        self.id_of(label)
            .ok_or_else(|| GraphError::UnknownNode(label.clone()))
    }

    pub fn label_of(&self, v: &VertexId) -> Option<&L> {
        self.slot(v).map(|s| &s.label)
    }

    pub fn contains(&self, v: &VertexId) -> bool {
        self.slot(v).is_some()
    }

    /// Iterates over live nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &NodeSlot<L, E>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (VertexId::new(i), s)))
    }

    /// Adds a node with an empty adjacency list.
    pub fn insert(&mut self, label: L) -> Result<VertexId, L> {
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateNode(label));
        }
        let vid = VertexId::new(self.slots.len());
        self.index.insert(label.clone(), vid);
        debug!("added node {:?} as {:?}", label, vid);
        self.slots.push(Some(NodeSlot {
            label,
            edges: vec![],
        }));
        Ok(vid)
    }

    /// Adjacency list of a vertex, empty if the vertex is not alive.
    pub fn edges(&self, v: &VertexId) -> &[E] {
        self.slot(v).map(|s| s.edges.as_slice()).unwrap_or(&[])
    }

    /// Looks up the root of a traversal or a search.
    pub(crate) fn root(&self, label: &L) -> Result<VertexId, L> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        self.require(label)
    }

    /// Labels of vertices an algorithm just returned, all of which are alive.
    pub(crate) fn labels(&self, vs: Vec<VertexId>) -> Vec<&L> {
        vs.iter().map(|v| &self[v]).collect()
    }

    /// Names vertices in an error raised by a low-level algorithm with their labels.
    pub(crate) fn relabel(&self, err: GraphError<VertexId>) -> GraphError<L> {
        err.map_node(|v| self[&v].clone())
    }

    fn slot(&self, v: &VertexId) -> Option<&NodeSlot<L, E>> {
        self.slots.get(v.to_raw()).and_then(|s| s.as_ref())
    }

    fn slot_mut(&mut self, v: &VertexId) -> Option<&mut NodeSlot<L, E>> {
        self.slots.get_mut(v.to_raw()).and_then(|s| s.as_mut())
    }
}

impl<L, E> NodeRegistry<L, E>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    E: AdjacentEdge,
{
    /// Removes a node and every adjacency entry pointing at it from any list.
    ///
    /// Returns the ID the node had.
    pub fn remove(&mut self, label: &L) -> Result<VertexId, L> {
        let vid = self
            .index
            .remove(label)
            .ok_or_else(|| GraphError::UnknownNode(label.clone()))?;
        // every indexed label has a live slot
        let mut dropped = self
            .slots
            .get_mut(vid.to_raw())
            .and_then(Option::take)
            .map_or(0, |slot| slot.edges.len());
        for other in self.slots.iter_mut().flatten() {
            let before = other.edges.len();
            other.edges.retain(|e| e.sink() != vid);
            dropped += before - other.edges.len();
        }
        self.entry_size -= dropped;
        debug!(
            "removed node {:?} ({:?}) with {} adjacency entries",
            label, vid, dropped
        );
        Ok(vid)
    }

    /// Appends an entry to the adjacency list of its source.
    ///
    /// Callers validate endpoints before, so that a failing call mutates nothing.
    pub(crate) fn push_edge(&mut self, edge: E) {
        let source = edge.source();
        if let Some(slot) = self.slot_mut(&source) {
            slot.edges.push(edge);
            self.entry_size += 1;
        }
    }

    /// Removes the first entry in the list of `v` matching `pred`.
    pub(crate) fn remove_edge<P>(&mut self, v: &VertexId, pred: P) -> Option<E>
    where
        P: Fn(&E) -> bool,
    {
        let slot = self.slot_mut(v)?;
        let pos = slot.edges.iter().position(pred)?;
        let e = slot.edges.remove(pos);
        self.entry_size -= 1;
        Some(e)
    }

    /// Removes every entry in the list of `v` carrying edge ID `id`.
    pub(crate) fn remove_edges_by_id(&mut self, v: &VertexId, id: EdgeId) -> usize {
        let removed = match self.slot_mut(v) {
            Some(slot) => {
                let before = slot.edges.len();
                slot.edges.retain(|e| e.id() != id);
                before - slot.edges.len()
            }
            None => 0,
        };
        self.entry_size -= removed;
        removed
    }
}

impl<L, E> std::ops::Index<&VertexId> for NodeRegistry<L, E>
where
    L: Hash + Eq,
{
    type Output = L;

    /// Panics if the vertex is not alive.
    fn index(&self, v: &VertexId) -> &L {
        match self.slots.get(v.to_raw()) {
            Some(Some(slot)) => &slot.label,
            _ => panic!("{:?} is not in the registry", v),
        }
    }
}

impl<L, E> QueryableGraph for NodeRegistry<L, E>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    E: AdjacentEdge,
{
    fn vertex_size(&self) -> usize {
        self.len()
    }

    fn vertex_bound(&self) -> usize {
        self.slots.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.iter().map(|(v, _)| v))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.entry_size
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges(v).iter().map(|e| e.to_edge()))
    }
}

impl<L, W> WeightedQueryableGraph for NodeRegistry<L, WeightedEdge<W>>
where
    L: Hash + Eq + Clone + std::fmt::Debug,
    W: Weight,
{
    type Weight = W;

    fn weighted_out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge<W>> + '_> {
        Box::new(self.edges(v).iter().copied())
    }
}
