//! Ramus core library.
//!
//! In-memory ordered containers and graph algorithms: a self-balancing
//! binary search tree with interchangeable balancing strategies
//! (height-balanced, colour-balanced, splay-on-access), a disjoint-set
//! (union-find) structure, and an adjacency-list graph with traversal,
//! shortest-path, and connectivity queries built on top of it.
//!
//! Everything is purely in-memory and single-threaded: invariants are
//! restored synchronously before each mutating call returns, and none of
//! the structures are safe for concurrent mutation without external
//! synchronisation.
//!
//! Keys need a total order (`Ord`); edge weights need the small
//! arithmetic-and-order contract captured by [`Weight`]. Both are supplied
//! by the caller's types.

mod disjoint_set;
mod error;
mod graph;
mod tree;
mod weight;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode},
    graph::{
        Bfs, Dfs, Graph, GraphBuilder, Neighbors, Orientation, ShortestPath, SpanningEdge,
        SpanningForest, Weighting,
    },
    tree::{BalanceStrategy, InOrder, PostOrder, PreOrder, Range, SearchTree},
    weight::Weight,
};
