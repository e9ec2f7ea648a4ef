//! A generic in-memory graph store with an algorithm suite.
//!
//! The two stores, [`UndirectedGraph`] and [`DirectedGraph`], are keyed
//! by vertex *values* of any type implementing [`Vertex`] (equality +
//! hashing; a total order unlocks sorted listings and canonical edge
//! orientation). On top of the undirected store's query contract sit the
//! analyses: connected components, BFS shortest paths and distances,
//! Eulerian trails, bipartite two-coloring, and greedy chromatic coloring.
//! The `generators`, `transform`, and `matrix` modules are thin consumers
//! of the same public API.
//!
//! Everything is single-threaded and synchronous; a store used from
//! several threads needs external serialization, which `&mut self` on
//! every mutation makes structural.

pub mod coloring;
pub mod connectivity;
pub mod directed;
pub mod error;
pub mod euler;
pub mod generators;
pub mod graph;
pub mod matrix;
pub mod pairs;
pub mod search;
pub mod tracing_support;
pub mod transform;
pub mod undirected;
pub mod vertex;

pub use coloring::color_count;
pub use directed::DirectedGraph;
pub use error::GraphError;
pub use graph::Graph;
pub use pairs::UnorderedPair;
pub use transform::Side;
pub use undirected::UndirectedGraph;
pub use vertex::Vertex;
