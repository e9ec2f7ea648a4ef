//! Matrix exports of an undirected graph.
//!
//! All three exporters index rows by the position of each vertex in the
//! ascending vertex list, so they require an ordered vertex type. They
//! read only `vertex_list`/`edge_list`/`has_edge` and never look at
//! internal structures.

use std::collections::HashMap;

use crate::{undirected::UndirectedGraph, vertex::Vertex};

/// The symmetric 0/1 adjacency matrix.
pub fn adjacency_matrix<V>(graph: &UndirectedGraph<V>) -> Vec<Vec<u8>>
where
    V: Vertex + Ord,
{
    let vertices = graph.vertex_list();
    vertices
        .iter()
        .map(|u| {
            vertices
                .iter()
                .map(|w| u8::from(graph.has_edge(u, w)))
                .collect()
        })
        .collect()
}

/// The Laplacian matrix `D - A`: degrees on the diagonal, `-1` for each
/// edge off it. Every row and column sums to zero.
pub fn laplacian_matrix<V>(graph: &UndirectedGraph<V>) -> Vec<Vec<i64>>
where
    V: Vertex + Ord,
{
    let vertices = graph.vertex_list();
    vertices
        .iter()
        .map(|u| {
            let degree = graph.degree(u).expect("member vertex") as i64;
            vertices
                .iter()
                .map(|w| {
                    if u == w {
                        degree
                    } else if graph.has_edge(u, w) {
                        -1
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect()
}

/// The vertex-by-edge incidence matrix: rows follow the ascending vertex
/// list, columns follow [`UndirectedGraph::edge_list`] order, and each
/// column has exactly two ones.
pub fn incidence_matrix<V>(graph: &UndirectedGraph<V>) -> Vec<Vec<u8>>
where
    V: Vertex + Ord,
{
    let vertices = graph.vertex_list();
    let position: HashMap<&V, usize> = vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
    let edges = graph.edge_list();
    let mut matrix = vec![vec![0; edges.len()]; vertices.len()];
    for (column, (u, w)) in edges.iter().enumerate() {
        matrix[position[u]][column] = 1;
        matrix[position[w]][column] = 1;
    }
    matrix
}
