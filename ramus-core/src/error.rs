//! Error types for the ramus core library.
//!
//! Defines error enums exposed by the public API together with stable,
//! machine-readable error codes for logging surfaces.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::Graph`] operations.
///
/// Every condition is detected synchronously at the call that caused it and
/// is reported before any mutation takes place; a failed operation never
/// leaves the graph in a partially updated state.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// An edge was given the same vertex as both endpoints.
    SelfLoop {
        /// Rendered identifier of the offending vertex.
        vertex: String,
    },
    /// The named vertex is not present in the graph.
    VertexNotFound {
        /// Rendered identifier of the missing vertex.
        vertex: String,
    },
    /// No edge connects the two named vertices.
    EdgeNotFound {
        /// Rendered identifier of the source vertex.
        source: String,
        /// Rendered identifier of the target vertex.
        target: String,
    },
    /// A shortest-path query found an edge with a negative weight.
    NegativeWeight {
        /// Rendered identifier of the source vertex.
        source: String,
        /// Rendered identifier of the target vertex.
        target: String,
    },
    /// A minimum spanning tree was requested for a directed graph.
    MstRequiresUndirected,
    /// An explicit edge weight was supplied to a graph configured unweighted.
    UnweightedGraph,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { vertex } => write!(
                f,
                "self-loop on vertex {vertex} is not permitted in a simple graph"
            ),
            Self::VertexNotFound { vertex } => {
                write!(f, "vertex {vertex} is not in the graph")
            }
            Self::EdgeNotFound { source, target } => {
                write!(f, "no edge between {source} and {target}")
            }
            Self::NegativeWeight { source, target } => write!(
                f,
                "edge ({source}, {target}) has a negative weight; Dijkstra requires non-negative weights"
            ),
            Self::MstRequiresUndirected => f.write_str(
                "minimum spanning trees are defined for undirected graphs only",
            ),
            Self::UnweightedGraph => f.write_str(
                "graph is configured unweighted; use add_edge for unit-weight edges",
            ),
        }
    }
}

impl std::error::Error for GraphError {}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge was given the same vertex as both endpoints.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The named vertex is not present in the graph.
        VertexNotFound => VertexNotFound { .. } => "GRAPH_VERTEX_NOT_FOUND",
        /// No edge connects the two named vertices.
        EdgeNotFound => EdgeNotFound { .. } => "GRAPH_EDGE_NOT_FOUND",
        /// A shortest-path query found an edge with a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// A minimum spanning tree was requested for a directed graph.
        MstRequiresUndirected => MstRequiresUndirected => "GRAPH_MST_REQUIRES_UNDIRECTED",
        /// An explicit edge weight was supplied to an unweighted graph.
        UnweightedGraph => UnweightedGraph => "GRAPH_UNWEIGHTED",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element index was never registered via `make_set`.
    #[error("element {element} is not registered; {len} elements exist")]
    NotFound {
        /// The unregistered element index supplied by the caller.
        element: usize,
        /// The number of elements currently registered.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element index was never registered via `make_set`.
        NotFound => NotFound { .. } => "DISJOINT_SET_NOT_FOUND",
    }
}
