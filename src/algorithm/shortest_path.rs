use crate::{error::*, graph::*};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Predecessors on shortest paths, i.e., `previous[v]` is the vertex right before `v`.
pub type PreviousMap = HashMap<VertexId, VertexId, RandomState>;

/// A path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<V> {
    /// From the source to the target, both inclusive.
    pub nodes: Vec<V>,
    pub distance: Distance,
}

/// What Dijkstra's algorithm found from one source.
///
/// It does not borrow the graph, so it describes the graph as it was when computed.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: VertexId,
    distances: Vec<Option<Distance>>,
    previous: PreviousMap,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Distance from the source, `None` if unreached.
    pub fn distance(&self, v: &VertexId) -> Option<Distance> {
        self.distances.get(v.to_raw()).copied().flatten()
    }

    pub fn previous(&self) -> &PreviousMap {
        &self.previous
    }

    /// Reconstructs the shortest path to `to` together with its weight.
    pub fn path_to(&self, to: &VertexId) -> Result<Path<VertexId>, VertexId> {
        let distance = self.distance(to).ok_or(GraphError::NoPath {
            from: self.source,
            to: *to,
        })?;
        let nodes = build_path(&self.source, to, &self.previous)?;
        Ok(Path { nodes, distance })
    }
}

/// Walks back from `to` through `previous` until the source.
///
/// Fails with [GraphError::NoPath] if `to` was never reached.
pub fn build_path(
    source: &VertexId,
    to: &VertexId,
    previous: &PreviousMap,
) -> Result<Vec<VertexId>, VertexId> {
    if to != source && !previous.contains_key(to) {
        return Err(GraphError::NoPath {
            from: *source,
            to: *to,
        });
    }
    let mut nodes = vec![*to];
    let mut cur = *to;
    while let Some(prev) = previous.get(&cur) {
        nodes.push(*prev);
        cur = *prev;
    }
    nodes.reverse();
    Ok(nodes)
}

/// Single-source shortest paths by Dijkstra's algorithm.
///
/// Weights must not be negative.
/// Path lengths are summed as [Distance]s, exactly, whatever the weight type.
/// $O((\|V\| + \|E\|) \log \|V\|)$.
pub trait ShortestPath
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Settles vertices in order of distance from `source`.
    ///
    /// Stops as soon as `target` is settled, or runs until every reachable vertex is settled
    /// if there is no target.
    /// Ties in the frontier are broken by insertion order.
    /// Fails with [GraphError::DistanceOverflow] if a path length does not fit in a [Distance].
    fn dijkstra(
        &self,
        source: &VertexId,
        target: Option<&VertexId>,
    ) -> Result<ShortestPathTree, VertexId> {
        if self.vertex_size() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        for v in std::iter::once(source).chain(target) {
            if !self.contains_vertex(v) {
                return Err(GraphError::UnknownNode(*v));
            }
        }

        let bound = self.vertex_bound();
        let mut distances = vec![None; bound];
        let mut settled = vec![false; bound];
        let mut previous = PreviousMap::with_hasher(RandomState::new());
        let mut frontier: KeyedPriorityQueue<VertexId, Reverse<(Distance, u64)>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        let mut seq: u64 = 0;
        distances[source.to_raw()] = Some(0);
        frontier.push(*source, Reverse((0, seq)));

        while let Some((current, Reverse((dist, _)))) = frontier.pop() {
            settled[current.to_raw()] = true;
            trace!("settled {:?} at {}", current, dist);
            if Some(&current) == target {
                break;
            }
            for e in self.weighted_out_edges(&current) {
                let next = e.sink.to_raw();
                if settled[next] {
                    continue;
                }
                let candidate = dist.checked_add(e.weight.to_distance()).ok_or(
                    GraphError::DistanceOverflow {
                        from: *source,
                        to: e.sink,
                    },
                )?;
                if distances[next].map_or(true, |d| candidate < d) {
                    trace!("relaxed {:?} to {} via {:?}", e.sink, candidate, current);
                    distances[next] = Some(candidate);
                    previous.insert(e.sink, current);
                    seq += 1;
                    // re-inserting a queued vertex updates its priority
                    frontier.push(e.sink, Reverse((candidate, seq)));
                }
            }
        }

        Ok(ShortestPathTree {
            source: *source,
            distances,
            previous,
        })
    }

    /// Shortest path from `from` to `to` and its total weight.
    fn shortest_path(&self, from: &VertexId, to: &VertexId) -> Result<Path<VertexId>, VertexId> {
        let tree = self.dijkstra(from, Some(to))?;
        let res = tree.path_to(to);
        match &res {
            Ok(path) => debug!(
                "shortest path {:?} -> {:?} weighs {}",
                from, to, path.distance
            ),
            Err(_) => debug!("no path {:?} -> {:?}", from, to),
        }
        res
    }
}

impl<G: WeightedQueryableGraph> ShortestPath for G {}
