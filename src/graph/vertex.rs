/// ID for vertices, which is essentially the index of a slot in the node arena.
///
/// IDs are never reused in a graph.
/// A removed vertex leaves its slot behind as a tombstone.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}
