//! Connectivity queries backed by the disjoint-set structure.
//!
//! Both queries construct a fresh [`DisjointSet`] over the current vertex
//! roster rather than persisting one across graph mutations, so the
//! partition can never go stale. Vertices are numbered densely in insertion
//! order for the duration of a query.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, instrument};

use super::{Graph, Orientation};
use crate::{disjoint_set::DisjointSet, error::GraphError, weight::Weight};

/// A single accepted spanning edge in insertion-canonical form.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningEdge<V, W> {
    source: V,
    target: V,
    weight: W,
}

impl<V, W: Weight> SpanningEdge<V, W> {
    /// Returns the endpoint registered earlier.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &V { &self.source }

    /// Returns the endpoint registered later.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &V { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }
}

/// The output of a minimum spanning tree computation.
///
/// When the graph is connected the forest is a single spanning tree;
/// otherwise it is one minimum tree per component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<V, W> {
    edges: Vec<SpanningEdge<V, W>>,
    total_weight: W,
    component_count: usize,
}

impl<V, W: Weight> SpanningForest<V, W> {
    /// Returns the accepted edges in ascending weight order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[SpanningEdge<V, W>] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of connected components spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans one connected component.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Partitions the vertices into connected components.
    ///
    /// Every edge's endpoints are unioned in a fresh disjoint-set and the
    /// vertices grouped by representative. Components appear in the order
    /// their first vertex was registered, each listing its vertices in
    /// registration order. Directed edges are treated as connections, so
    /// for directed graphs this yields weakly connected components.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::Graph;
    ///
    /// let mut graph: Graph<u32, u32> = Graph::undirected();
    /// graph.add_edge(1, 2)?;
    /// graph.add_edge(3, 4)?;
    ///
    /// let components = graph.connected_components();
    /// assert_eq!(components, vec![vec![1, 2], vec![3, 4]]);
    /// # Ok::<(), ramus_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        let index = self.dense_index();
        let mut sets = DisjointSet::with_len(self.order.len());

        for (source, vertex) in self.order.iter().enumerate() {
            let Some(list) = self.adjacency.get(vertex) else {
                continue;
            };
            for (neighbour, _) in list {
                let target = index[neighbour];
                sets.union(source, target)
                    .expect("roster indices are registered");
            }
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<V>> = Vec::new();
        for (position, vertex) in self.order.iter().enumerate() {
            let root = sets
                .find(position)
                .expect("roster indices are registered");
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(vertex.clone());
        }
        debug!(components = components.len(), "partitioned vertex roster");
        components
    }

    /// Computes a minimum spanning forest by Kruskal's algorithm.
    ///
    /// Each undirected edge is considered once, in ascending weight order
    /// with endpoint indices as the deterministic tie-break; an edge is
    /// accepted when its endpoints lie in different components, until
    /// `n - 1` edges are accepted or the candidates are exhausted.
    ///
    /// # Errors
    /// Returns [`GraphError::MstRequiresUndirected`] when the graph is
    /// directed; spanning trees are undefined for directed graphs.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::Graph;
    ///
    /// let mut graph: Graph<char, u32> = Graph::undirected();
    /// graph.add_weighted_edge('a', 'b', 1)?;
    /// graph.add_weighted_edge('b', 'c', 2)?;
    /// graph.add_weighted_edge('c', 'd', 3)?;
    /// graph.add_weighted_edge('d', 'a', 4)?;
    ///
    /// let forest = graph.minimum_spanning_tree()?;
    /// assert_eq!(forest.edges().len(), 3);
    /// assert_eq!(forest.total_weight(), 6);
    /// assert!(forest.is_spanning_tree());
    /// # Ok::<(), ramus_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.minimum_spanning_tree",
        level = "debug",
        err,
        skip(self),
        fields(vertices = self.vertex_count(), edges = self.edge_count()),
    )]
    pub fn minimum_spanning_tree(&self) -> Result<SpanningForest<V, W>, GraphError> {
        if self.orientation == Orientation::Directed {
            return Err(GraphError::MstRequiresUndirected);
        }

        let index = self.dense_index();
        let vertex_count = self.order.len();

        let mut candidates: Vec<(W, usize, usize)> = Vec::with_capacity(self.edges);
        for (source, vertex) in self.order.iter().enumerate() {
            let Some(list) = self.adjacency.get(vertex) else {
                continue;
            };
            for (neighbour, weight) in list {
                let target = index[neighbour];
                if source < target {
                    candidates.push((*weight, source, target));
                }
            }
        }
        candidates.sort_unstable_by(|left, right| {
            left.0
                .total_order(&right.0)
                .then_with(|| left.1.cmp(&right.1))
                .then_with(|| left.2.cmp(&right.2))
        });

        let mut sets = DisjointSet::with_len(vertex_count);
        let mut edges = Vec::new();
        let mut total_weight = W::zero();
        for (weight, source, target) in candidates {
            if edges.len() == vertex_count.saturating_sub(1) {
                break;
            }
            let merged = sets
                .union(source, target)
                .expect("roster indices are registered");
            if merged {
                total_weight = total_weight + weight;
                edges.push(SpanningEdge {
                    source: self.order[source].clone(),
                    target: self.order[target].clone(),
                    weight,
                });
            }
        }

        Ok(SpanningForest {
            edges,
            total_weight,
            component_count: sets.components(),
        })
    }

    fn dense_index(&self) -> HashMap<&V, usize> {
        self.order
            .iter()
            .enumerate()
            .map(|(position, vertex)| (vertex, position))
            .collect()
    }
}
