//! Named graph families over `u32` vertices numbered from zero.
//!
//! Generators build exclusively through the public mutation API, so every
//! store invariant holds by construction. Randomized generators come in
//! pairs: a convenience form drawing from [`rand::rng`] and a `_with_rng`
//! form for seeded, reproducible output.

use rand::Rng;

use crate::{error::GraphError, undirected::UndirectedGraph};

/// The path on `n` vertices (`n - 1` edges). `path_graph(0)` is the empty
/// graph and `path_graph(1)` a single vertex.
pub fn path_graph(n: u32) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_edge(v - 1, v);
    }
    graph
}

/// The cycle on `n` vertices. Fails with [`GraphError::InvalidSize`] for
/// `n < 3`; anything shorter is not a cycle.
pub fn cycle_graph(n: u32) -> Result<UndirectedGraph<u32>, GraphError<u32>> {
    if n < 3 {
        return Err(GraphError::InvalidSize {
            wanted: 3,
            got: n as usize,
        });
    }
    let mut graph = path_graph(n);
    graph.add_edge(n - 1, 0);
    Ok(graph)
}

/// The complete graph on `n` vertices.
pub fn complete_graph(n: u32) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for w in (u + 1)..n {
            graph.add_edge(u, w);
        }
    }
    graph
}

/// The star on `n` vertices: hub `0` joined to every other vertex.
pub fn star_graph(n: u32) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_edge(0, v);
    }
    graph
}

/// The wheel on `n` vertices: hub `0` joined to every vertex of the cycle
/// `1..n`. Fails with [`GraphError::InvalidSize`] for `n < 4`, since the
/// rim must be a cycle.
pub fn wheel_graph(n: u32) -> Result<UndirectedGraph<u32>, GraphError<u32>> {
    if n < 4 {
        return Err(GraphError::InvalidSize {
            wanted: 4,
            got: n as usize,
        });
    }
    let mut graph = UndirectedGraph::new();
    for v in 1..n {
        graph.add_edge(0, v);
        let next = if v + 1 < n { v + 1 } else { 1 };
        graph.add_edge(v, next);
    }
    Ok(graph)
}

/// The Petersen graph: outer 5-cycle `0..5`, inner pentagram `5..10`,
/// spokes between them. 3-regular on 10 vertices with 15 edges.
pub fn petersen_graph() -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..5 {
        graph.add_edge(v, (v + 1) % 5);
        graph.add_edge(v, v + 5);
        graph.add_edge(v + 5, (v + 2) % 5 + 5);
    }
    graph
}

/// A G(n, p) random graph: every unordered pair becomes an edge
/// independently with probability `p` (clamped to `[0, 1]`).
pub fn gnp_graph(n: u32, p: f64) -> UndirectedGraph<u32> {
    gnp_graph_with_rng(n, p, &mut rand::rng())
}

/// [`gnp_graph`] with a caller-supplied generator.
pub fn gnp_graph_with_rng(n: u32, p: f64, rng: &mut impl Rng) -> UndirectedGraph<u32> {
    let p = p.clamp(0.0, 1.0);
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for w in (u + 1)..n {
            if rng.random_bool(p) {
                graph.add_edge(u, w);
            }
        }
    }
    graph
}

/// A random tree on `n` vertices: each vertex after the first attaches to
/// a uniformly chosen earlier vertex, giving a connected graph with
/// `n - 1` edges.
pub fn random_tree(n: u32) -> UndirectedGraph<u32> {
    random_tree_with_rng(n, &mut rand::rng())
}

/// [`random_tree`] with a caller-supplied generator.
pub fn random_tree_with_rng(n: u32, rng: &mut impl Rng) -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_edge(rng.random_range(0..v), v);
    }
    graph
}
