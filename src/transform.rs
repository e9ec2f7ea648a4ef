//! Derived-graph transformations.
//!
//! Every function here reads one or two graphs through the public query
//! API and writes a freshly constructed store through the public mutation
//! API; none of them touch internal structures or mutate their input.

use std::collections::HashSet;

use crate::{error::GraphError, undirected::UndirectedGraph, vertex::Vertex};

/// Tags a vertex with the operand it came from, so disjoint unions and
/// joins keep same-valued vertices of the two operands apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side<A, B> {
    Left(A),
    Right(B),
}

/// The complement graph: same vertices, an edge exactly where the input
/// has none (self-pairs excluded).
pub fn complement<V: Vertex>(graph: &UndirectedGraph<V>) -> UndirectedGraph<V> {
    let mut result = UndirectedGraph::new();
    let vertices: Vec<&V> = graph.vertices().collect();
    for v in &vertices {
        result.add_vertex((*v).clone());
    }
    for (i, u) in vertices.iter().enumerate() {
        for w in &vertices[i + 1..] {
            if !graph.has_edge(u, w) {
                result.add_edge((*u).clone(), (*w).clone());
            }
        }
    }
    result
}

/// The subgraph induced by `keep`: those vertices and every edge whose
/// endpoints both remain. Fails with [`GraphError::UnknownVertex`] if
/// `keep` names a vertex the graph does not have.
pub fn induced_subgraph<V: Vertex>(
    graph: &UndirectedGraph<V>,
    keep: &HashSet<V>,
) -> Result<UndirectedGraph<V>, GraphError<V>> {
    let mut result = UndirectedGraph::new();
    for v in keep {
        if !graph.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v.clone()));
        }
        result.add_vertex(v.clone());
    }
    for (u, w) in graph.edges() {
        if keep.contains(u) && keep.contains(w) {
            result.add_edge(u.clone(), w.clone());
        }
    }
    Ok(result)
}

/// The disjoint union: both graphs side by side, vertices tagged with
/// [`Side`] so the operands cannot collide.
pub fn disjoint_union<A: Vertex, B: Vertex>(
    left: &UndirectedGraph<A>,
    right: &UndirectedGraph<B>,
) -> UndirectedGraph<Side<A, B>> {
    let mut result = UndirectedGraph::new();
    for v in left.vertices() {
        result.add_vertex(Side::Left(v.clone()));
    }
    for v in right.vertices() {
        result.add_vertex(Side::Right(v.clone()));
    }
    for (u, w) in left.edges() {
        result.add_edge(Side::Left(u.clone()), Side::Left(w.clone()));
    }
    for (u, w) in right.edges() {
        result.add_edge(Side::Right(u.clone()), Side::Right(w.clone()));
    }
    result
}

/// The join: the disjoint union plus every edge between the two sides.
pub fn join<A: Vertex, B: Vertex>(
    left: &UndirectedGraph<A>,
    right: &UndirectedGraph<B>,
) -> UndirectedGraph<Side<A, B>> {
    let mut result = disjoint_union(left, right);
    for u in left.vertices() {
        for w in right.vertices() {
            result.add_edge(Side::Left(u.clone()), Side::Right(w.clone()));
        }
    }
    result
}

/// The line graph: one vertex per edge of the input (in canonical
/// orientation), adjacent exactly when the underlying edges share an
/// endpoint.
pub fn line_graph<V>(graph: &UndirectedGraph<V>) -> UndirectedGraph<(V, V)>
where
    V: Vertex + Ord,
{
    let mut result = UndirectedGraph::new();
    let edges = graph.edge_list();
    for edge in &edges {
        result.add_vertex(edge.clone());
    }
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            let shares_endpoint = a.0 == b.0 || a.0 == b.1 || a.1 == b.0 || a.1 == b.1;
            if shares_endpoint {
                result.add_edge(a.clone(), b.clone());
            }
        }
    }
    result
}
