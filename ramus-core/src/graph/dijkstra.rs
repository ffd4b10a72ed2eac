//! Shortest paths by Dijkstra's algorithm.
//!
//! A priority frontier keyed by tentative distance relaxes edges greedily;
//! once the target is settled the path is rebuilt from predecessor links.
//! Frontier entries carry a monotonic sequence number so ties break
//! deterministically under any [`Weight`] type. Correctness depends on
//! non-negative weights, so every edge is validated before the frontier is
//! seeded; Bellman-Ford semantics are out of scope.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, instrument};

use super::Graph;
use crate::{error::GraphError, weight::Weight};

/// A settled shortest path: the vertex sequence and its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath<V, W> {
    path: Vec<V>,
    total_weight: W,
}

impl<V, W: Weight> ShortestPath<V, W> {
    /// Returns the vertices along the path, start and end included.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[V] { &self.path }

    /// Returns the sum of the traversed edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }
}

struct FrontierEntry<'g, V, W> {
    distance: W,
    sequence: u64,
    vertex: &'g V,
}

impl<V, W: Weight> Ord for FrontierEntry<'_, V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_order(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<V, W: Weight> PartialOrd for FrontierEntry<'_, V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> PartialEq for FrontierEntry<'_, V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for FrontierEntry<'_, V, W> {}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Computes the minimum-weight path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` is unreachable from `start`. A path
    /// from a vertex to itself is the single-vertex path of weight
    /// [`Weight::zero`].
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when either endpoint is
    /// absent and [`GraphError::NegativeWeight`] when any edge in the graph
    /// carries a negative weight. Validation happens before the search
    /// starts and the graph is never modified.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::Graph;
    ///
    /// let mut graph: Graph<char, u32> = Graph::undirected();
    /// graph.add_weighted_edge('a', 'b', 1)?;
    /// graph.add_weighted_edge('b', 'c', 2)?;
    /// graph.add_weighted_edge('a', 'c', 4)?;
    ///
    /// let found = graph.shortest_path(&'a', &'c')?.expect("reachable");
    /// assert_eq!(found.path(), ['a', 'b', 'c']);
    /// assert_eq!(found.total_weight(), 3);
    /// # Ok::<(), ramus_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.shortest_path",
        level = "debug",
        err,
        skip(self, start, end),
        fields(start = ?start, end = ?end, vertices = self.vertex_count(), edges = self.edge_count()),
    )]
    pub fn shortest_path(
        &self,
        start: &V,
        end: &V,
    ) -> Result<Option<ShortestPath<V, W>>, GraphError> {
        let start = self.vertex_ref(start)?;
        let end = self.vertex_ref(end)?;
        self.reject_negative_weights()?;

        let mut distances: HashMap<&V, W> = HashMap::new();
        let mut predecessors: HashMap<&V, &V> = HashMap::new();
        let mut settled: HashSet<&V> = HashSet::new();
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;

        distances.insert(start, W::zero());
        frontier.push(Reverse(FrontierEntry {
            distance: W::zero(),
            sequence,
            vertex: start,
        }));

        while let Some(Reverse(entry)) = frontier.pop() {
            if !settled.insert(entry.vertex) {
                continue;
            }
            if entry.vertex == end {
                break;
            }
            let Some(list) = self.adjacency.get(entry.vertex) else {
                continue;
            };
            for (neighbour, weight) in list {
                if settled.contains(neighbour) {
                    continue;
                }
                let candidate = entry.distance + *weight;
                let improves = distances
                    .get(neighbour)
                    .is_none_or(|known| candidate.total_order(known) == Ordering::Less);
                if improves {
                    distances.insert(neighbour, candidate);
                    predecessors.insert(neighbour, entry.vertex);
                    sequence += 1;
                    frontier.push(Reverse(FrontierEntry {
                        distance: candidate,
                        sequence,
                        vertex: neighbour,
                    }));
                }
            }
        }

        if !settled.contains(end) {
            debug!(end = ?end, "target not reachable from start");
            return Ok(None);
        }

        let Some(&total_weight) = distances.get(end) else {
            return Ok(None);
        };
        let mut path = Vec::new();
        let mut cursor = end;
        loop {
            path.push(cursor.clone());
            if cursor == start {
                break;
            }
            let Some(&previous) = predecessors.get(cursor) else {
                return Ok(None);
            };
            cursor = previous;
        }
        path.reverse();

        Ok(Some(ShortestPath { path, total_weight }))
    }

    fn reject_negative_weights(&self) -> Result<(), GraphError> {
        for vertex in &self.order {
            let Some(list) = self.adjacency.get(vertex) else {
                continue;
            };
            for (neighbour, weight) in list {
                if weight.is_negative() {
                    return Err(GraphError::NegativeWeight {
                        source: format!("{vertex:?}"),
                        target: format!("{neighbour:?}"),
                    });
                }
            }
        }
        Ok(())
    }
}
