use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Both mirrored entries of an undirected edge share one ID.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// Information about a low-level edge.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

/// A low-level edge carrying a weight.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct WeightedEdge<W> {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
    pub weight: W,
}

/// Entries stored in adjacency lists.
///
/// Algorithms only need endpoints and ID's,
/// so any entry type must be able to tell them.
pub trait AdjacentEdge {
    fn id(&self) -> EdgeId;
    fn source(&self) -> VertexId;
    fn sink(&self) -> VertexId;

    fn to_edge(&self) -> Edge {
        Edge {
            id: self.id(),
            source: self.source(),
            sink: self.sink(),
        }
    }
}

impl AdjacentEdge for Edge {
    fn id(&self) -> EdgeId {
        self.id
    }

    fn source(&self) -> VertexId {
        self.source
    }

    fn sink(&self) -> VertexId {
        self.sink
    }
}

impl<W> AdjacentEdge for WeightedEdge<W> {
    fn id(&self) -> EdgeId {
        self.id
    }

    fn source(&self) -> VertexId {
        self.source
    }

    fn sink(&self) -> VertexId {
        self.sink
    }
}

impl<W> WeightedEdge<W> {
    /// The same edge walked in the opposite direction.
    pub fn mirrored(&self) -> Self
    where
        W: Copy,
    {
        Self {
            id: self.id,
            source: self.sink,
            sink: self.source,
            weight: self.weight,
        }
    }
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
