//! Breadth-first and depth-first traversal.
//!
//! Both traversals are lazy iterators driven by an explicit frontier with a
//! visited set; each call to [`Graph::bfs`] or [`Graph::dfs`] starts from
//! scratch and the returned iterator is consumed once. Neighbours are
//! expanded in edge-insertion order.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use super::Graph;
use crate::{error::GraphError, weight::Weight};

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Returns the vertices reachable from `start` in breadth order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `start` is absent.
    ///
    /// # Examples
    /// ```
    /// use ramus_core::Graph;
    ///
    /// let mut graph: Graph<u32, u32> = Graph::undirected();
    /// graph.add_edge(1, 2)?;
    /// graph.add_edge(1, 3)?;
    /// graph.add_edge(2, 4)?;
    ///
    /// let order: Vec<u32> = graph.bfs(&1)?.copied().collect();
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// # Ok::<(), ramus_core::GraphError>(())
    /// ```
    pub fn bfs(&self, start: &V) -> Result<Bfs<'_, V, W>, GraphError> {
        let start = self.vertex_ref(start)?;
        let mut visited = HashSet::new();
        visited.insert(start);
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        Ok(Bfs {
            graph: self,
            frontier,
            visited,
        })
    }

    /// Returns the vertices reachable from `start` in depth order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] when `start` is absent.
    pub fn dfs(&self, start: &V) -> Result<Dfs<'_, V, W>, GraphError> {
        let start = self.vertex_ref(start)?;
        Ok(Dfs {
            graph: self,
            stack: vec![start],
            visited: HashSet::new(),
        })
    }
}

/// Breadth-first traversal over a borrowed graph.
pub struct Bfs<'g, V, W> {
    graph: &'g Graph<V, W>,
    frontier: VecDeque<&'g V>,
    visited: HashSet<&'g V>,
}

impl<'g, V, W> Iterator for Bfs<'g, V, W>
where
    V: Eq + Hash,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.frontier.pop_front()?;
        if let Some(list) = self.graph.adjacency.get(vertex) {
            for (neighbour, _) in list {
                if self.visited.insert(neighbour) {
                    self.frontier.push_back(neighbour);
                }
            }
        }
        Some(vertex)
    }
}

/// Depth-first (pre-order) traversal over a borrowed graph.
pub struct Dfs<'g, V, W> {
    graph: &'g Graph<V, W>,
    stack: Vec<&'g V>,
    visited: HashSet<&'g V>,
}

impl<'g, V, W> Iterator for Dfs<'g, V, W>
where
    V: Eq + Hash,
{
    type Item = &'g V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if !self.visited.insert(vertex) {
                continue;
            }
            if let Some(list) = self.graph.adjacency.get(vertex) {
                // reversed so the first-inserted neighbour is explored first
                for (neighbour, _) in list.iter().rev() {
                    if !self.visited.contains(neighbour) {
                        self.stack.push(neighbour);
                    }
                }
            }
            return Some(vertex);
        }
    }
}
