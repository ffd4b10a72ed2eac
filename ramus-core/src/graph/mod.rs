//! Adjacency-list graph with traversal, shortest-path, and connectivity
//! algorithms.
//!
//! Vertices are opaque caller-supplied identifiers; adjacency is a map from
//! vertex to an insertion-ordered neighbour list, plus a roster of vertices
//! in insertion order so traversals and partitions come out deterministic.
//! Orientation and weighting are fixed at construction.
//!
//! Only simple graphs are supported: self-loops are rejected and inserting
//! a parallel edge updates the stored weight instead of adding a second
//! arc. On undirected graphs the mirrored adjacency entries are added and
//! removed together within the same call.

mod connectivity;
mod dijkstra;
mod traversal;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub use self::connectivity::{SpanningEdge, SpanningForest};
pub use self::dijkstra::ShortestPath;
pub use self::traversal::{Bfs, Dfs};
use crate::{error::GraphError, weight::Weight};

/// Edge orientation, fixed when the graph is built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// Every edge is a single one-way arc.
    Directed,
    /// Every edge inserts mirrored arcs in both adjacency lists.
    Undirected,
}

/// Whether edges carry caller-supplied weights, fixed when the graph is
/// built.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weighting {
    /// Edges carry explicit weights.
    Weighted,
    /// Every edge weighs [`Weight::one`]; explicit weights are rejected.
    Unweighted,
}

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use ramus_core::{GraphBuilder, Orientation, Weighting};
///
/// let graph = GraphBuilder::new()
///     .with_orientation(Orientation::Directed)
///     .with_weighting(Weighting::Weighted)
///     .build::<&str, u32>();
/// assert_eq!(graph.orientation(), Orientation::Directed);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GraphBuilder {
    orientation: Orientation,
    weighting: Weighting,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            orientation: Orientation::Undirected,
            weighting: Weighting::Weighted,
        }
    }
}

impl GraphBuilder {
    /// Creates a builder for an undirected, weighted graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the edge orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Overrides the weighting mode.
    #[must_use]
    pub const fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Returns the configured orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the configured weighting mode.
    #[must_use]
    pub const fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Constructs an empty graph with this configuration.
    #[must_use]
    pub fn build<V, W>(self) -> Graph<V, W>
    where
        V: Clone + Eq + Hash + Debug,
        W: Weight,
    {
        Graph {
            adjacency: HashMap::new(),
            order: Vec::new(),
            orientation: self.orientation,
            weighting: self.weighting,
            edges: 0,
        }
    }
}

/// A simple adjacency-list graph over opaque vertex identifiers.
///
/// # Examples
/// ```
/// use ramus_core::Graph;
///
/// let mut graph: Graph<&str, u32> = Graph::undirected();
/// graph.add_weighted_edge("a", "b", 1)?;
/// graph.add_weighted_edge("b", "c", 2)?;
/// graph.add_weighted_edge("a", "c", 4)?;
///
/// let path = graph.shortest_path(&"a", &"c")?.expect("reachable");
/// assert_eq!(path.path(), ["a", "b", "c"]);
/// assert_eq!(path.total_weight(), 3);
/// # Ok::<(), ramus_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    adjacency: HashMap<V, Vec<(V, W)>>,
    order: Vec<V>,
    orientation: Orientation,
    weighting: Weighting,
    edges: usize,
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates an empty undirected, weighted graph.
    #[must_use]
    pub fn undirected() -> Self {
        GraphBuilder::new().build()
    }

    /// Creates an empty directed, weighted graph.
    #[must_use]
    pub fn directed() -> Self {
        GraphBuilder::new()
            .with_orientation(Orientation::Directed)
            .build()
    }

    /// Returns the orientation the graph was built with.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the weighting mode the graph was built with.
    #[must_use]
    pub const fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges; an undirected edge counts once.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    /// Returns `true` when the vertex is present.
    #[must_use]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Inserts a vertex with no incident edges.
    ///
    /// Inserting an already-present vertex is a no-op; the return value
    /// reports whether the vertex was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Removes a vertex and every edge incident to it.
    ///
    /// The vertex is scrubbed from every neighbour's adjacency list, not
    /// merely dropped from the roster.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent; the
    /// graph is left unmodified.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError> {
        let list = self
            .adjacency
            .remove(vertex)
            .ok_or_else(|| GraphError::VertexNotFound {
                vertex: format!("{vertex:?}"),
            })?;

        match self.orientation {
            Orientation::Undirected => {
                self.edges -= list.len();
                for (neighbour, _) in &list {
                    if let Some(entries) = self.adjacency.get_mut(neighbour) {
                        entries.retain(|entry| entry.0 != *vertex);
                    }
                }
            }
            Orientation::Directed => {
                self.edges -= list.len();
                for entries in self.adjacency.values_mut() {
                    let before = entries.len();
                    entries.retain(|entry| entry.0 != *vertex);
                    self.edges -= before - entries.len();
                }
            }
        }

        self.order.retain(|existing| existing != vertex);
        Ok(())
    }

    /// Inserts a unit-weight edge, creating missing endpoints.
    ///
    /// On undirected graphs the mirrored entry is inserted in the same
    /// call. A parallel edge updates the stored weight and returns the
    /// previous one; `None` signals a fresh edge.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints are the same
    /// vertex; the graph is left unmodified.
    pub fn add_edge(&mut self, source: V, target: V) -> Result<Option<W>, GraphError> {
        self.insert_edge(source, target, W::one())
    }

    /// Inserts an edge with an explicit weight, creating missing endpoints.
    ///
    /// # Errors
    /// Returns [`GraphError::UnweightedGraph`] when the graph was built
    /// unweighted, and [`GraphError::SelfLoop`] for equal endpoints; the
    /// graph is left unmodified either way.
    pub fn add_weighted_edge(
        &mut self,
        source: V,
        target: V,
        weight: W,
    ) -> Result<Option<W>, GraphError> {
        if self.weighting == Weighting::Unweighted {
            return Err(GraphError::UnweightedGraph);
        }
        self.insert_edge(source, target, weight)
    }

    fn insert_edge(&mut self, source: V, target: V, weight: W) -> Result<Option<W>, GraphError> {
        if source == target {
            return Err(GraphError::SelfLoop {
                vertex: format!("{source:?}"),
            });
        }

        self.add_vertex(source.clone());
        self.add_vertex(target.clone());

        let forward = self
            .adjacency
            .get_mut(&source)
            .expect("endpoint registered above");
        let previous = upsert_arc(forward, &target, weight);

        if self.orientation == Orientation::Undirected {
            let backward = self
                .adjacency
                .get_mut(&target)
                .expect("endpoint registered above");
            upsert_arc(backward, &source, weight);
        }

        if previous.is_none() {
            self.edges += 1;
        }
        Ok(previous)
    }

    /// Removes the edge between two vertices, returning its weight.
    ///
    /// On undirected graphs both mirrored entries are removed in the same
    /// call.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when either endpoint is
    /// absent and [`GraphError::EdgeNotFound`] when no edge connects them;
    /// the graph is left unmodified.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Result<W, GraphError> {
        for endpoint in [source, target] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(GraphError::VertexNotFound {
                    vertex: format!("{endpoint:?}"),
                });
            }
        }

        let forward = self
            .adjacency
            .get_mut(source)
            .expect("endpoint checked above");
        let position = forward
            .iter()
            .position(|entry| entry.0 == *target)
            .ok_or_else(|| GraphError::EdgeNotFound {
                source: format!("{source:?}"),
                target: format!("{target:?}"),
            })?;
        let (_, weight) = forward.remove(position);

        if self.orientation == Orientation::Undirected {
            if let Some(backward) = self.adjacency.get_mut(target) {
                backward.retain(|entry| entry.0 != *source);
            }
        }

        self.edges -= 1;
        Ok(weight)
    }

    /// Returns `true` when an edge connects the two vertices.
    #[must_use]
    pub fn has_edge(&self, source: &V, target: &V) -> bool {
        self.edge_weight(source, target).is_some()
    }

    /// Returns the weight of the edge between two vertices, if any.
    #[must_use]
    pub fn edge_weight(&self, source: &V, target: &V) -> Option<&W> {
        self.adjacency.get(source).and_then(|list| {
            list.iter()
                .find(|entry| entry.0 == *target)
                .map(|entry| &entry.1)
        })
    }

    /// Iterates over a vertex's neighbours in edge-insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when the vertex is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<Neighbors<'_, V, W>, GraphError> {
        let list = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::VertexNotFound {
                vertex: format!("{vertex:?}"),
            })?;
        Ok(Neighbors { inner: list.iter() })
    }

    fn vertex_ref(&self, vertex: &V) -> Result<&V, GraphError> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::VertexNotFound {
                vertex: format!("{vertex:?}"),
            })
    }
}

fn upsert_arc<V: Eq + Clone, W>(list: &mut Vec<(V, W)>, target: &V, weight: W) -> Option<W> {
    if let Some(entry) = list.iter_mut().find(|entry| entry.0 == *target) {
        Some(std::mem::replace(&mut entry.1, weight))
    } else {
        list.push((target.clone(), weight));
        None
    }
}

/// Iterator over a vertex's `(neighbour, weight)` pairs.
pub struct Neighbors<'a, V, W> {
    inner: std::slice::Iter<'a, (V, W)>,
}

impl<'a, V, W> Iterator for Neighbors<'a, V, W> {
    type Item = (&'a V, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.0, &entry.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, W> ExactSizeIterator for Neighbors<'_, V, W> {}

#[cfg(test)]
mod tests;
