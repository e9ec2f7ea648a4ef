/// Errors signaled by graph queries, algorithms, and generators.
///
/// Mutations are never errors: `add_*`/`remove_*`/`contract` report a
/// no-op attempt as `false` instead. Every variant here propagates to the
/// immediate caller unchanged; the crate never retries or recovers
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<V> {
    /// A query named a vertex that is not a member of the graph.
    #[error("unknown vertex {0:?}")]
    UnknownVertex(V),
    /// `is_cut_edge` was asked about a pair that is not an edge.
    #[error("no edge between {0:?} and {1:?}")]
    UnknownEdge(V, V),
    /// A two-coloring was requested of a graph with an odd cycle.
    #[error("graph is not bipartite")]
    NotBipartite,
    /// A generator was asked for a graph below its minimum size.
    #[error("size {got} is too small, need at least {wanted}")]
    InvalidSize { wanted: usize, got: usize },
}
