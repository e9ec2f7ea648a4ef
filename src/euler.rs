use std::collections::{HashMap, HashSet};

use crate::{graph::Graph, tracing_support::debug, undirected::UndirectedGraph, vertex::Vertex};

/// Eulerian-trail construction.
///
/// A trail uses every edge of the graph exactly once; a circuit is a
/// trail that returns to its start. Infeasibility is reported as an empty
/// sequence, which is also the answer for a graph with no vertices;
/// callers that need to tell the two apart check `vertex_count()` first.
impl<V: Vertex> UndirectedGraph<V> {
    /// Builds an Eulerian trail from `start` to `end`, or an empty vector
    /// if none exists.
    ///
    /// Vertices of degree zero are ignored for feasibility. On an
    /// edgeless graph the only trails are the single-vertex ones, so
    /// `start == end` yields `[start]` (if it is a member) and distinct
    /// endpoints are infeasible. With edges present, a closed trail
    /// exists iff the edge-bearing subgraph is connected and every degree
    /// is even; an open trail exists iff it is connected and exactly
    /// `start` and `end` have odd degree.
    ///
    /// A feasible result has length `edge_count() + 1`, begins with
    /// `start`, ends with `end`, steps only along edges, and uses every
    /// edge exactly once.
    pub fn euler_trail_between(&self, start: &V, end: &V) -> Vec<V> {
        if !self.has_vertex(start) || !self.has_vertex(end) {
            return Vec::new();
        }
        if self.edge_count() == 0 {
            return if start == end {
                vec![start.clone()]
            } else {
                Vec::new()
            };
        }
        if !self.euler_feasible(start, end) {
            debug!("no Eulerian trail between the requested endpoints");
            return Vec::new();
        }
        self.hierholzer(start)
    }

    /// Builds an Eulerian trail with automatically chosen endpoints: any
    /// vertex when a circuit exists, the two odd-degree vertices when an
    /// open trail exists, and an empty vector otherwise (including the
    /// zero-vertex graph).
    pub fn euler_trail(&self) -> Vec<V> {
        if self.is_empty() {
            return Vec::new();
        }
        let odd: Vec<&V> = self
            .vertices()
            .filter(|v| self.degree(v).expect("member vertex") % 2 == 1)
            .collect();
        match odd.as_slice() {
            [] => {
                // All even: start a circuit anywhere edges are, or report
                // the trivial single-vertex trail of an edgeless graph.
                let start = self
                    .vertices()
                    .find(|v| self.degree(v).expect("member vertex") > 0)
                    .or_else(|| self.vertices().next())
                    .expect("nonempty graph")
                    .clone();
                self.euler_trail_between(&start, &start)
            }
            [a, b] => {
                let (a, b) = ((*a).clone(), (*b).clone());
                self.euler_trail_between(&a, &b)
            }
            _ => Vec::new(),
        }
    }

    /// Feasibility test for a graph known to have at least one edge.
    fn euler_feasible(&self, start: &V, end: &V) -> bool {
        let expected_odd: HashSet<&V> = if start == end {
            HashSet::new()
        } else {
            HashSet::from([start, end])
        };
        for v in self.vertices() {
            let degree = self.degree(v).expect("member vertex");
            if (degree % 2 == 1) != expected_odd.contains(v) {
                return false;
            }
        }
        // The trail must reach every edge, so the whole edge-bearing
        // subgraph has to hang together from `start`.
        if self.degree(start).expect("member vertex") == 0 {
            return false;
        }
        let reached: HashSet<V> = self.bfs(start.clone()).collect();
        self.vertices()
            .filter(|v| self.degree(v).expect("member vertex") > 0)
            .all(|v| reached.contains(v))
    }

    /// Classic circuit-splicing construction: walk edges until stuck,
    /// backtrack emitting vertices, and splice in the sub-circuits found
    /// along the way. Assumes feasibility was already established.
    fn hierholzer(&self, start: &V) -> Vec<V> {
        let mut remaining: HashMap<V, HashSet<V>> = HashMap::new();
        for (u, w) in self.edges() {
            remaining
                .entry(u.clone())
                .or_default()
                .insert(w.clone());
            remaining
                .entry(w.clone())
                .or_default()
                .insert(u.clone());
        }

        let mut stack = vec![start.clone()];
        let mut trail = Vec::with_capacity(self.edge_count() + 1);
        while let Some(v) = stack.last().cloned() {
            let next = remaining
                .get(&v)
                .and_then(|targets| targets.iter().next().cloned());
            match next {
                Some(w) => {
                    remaining.get_mut(&v).expect("edge endpoint").remove(&w);
                    remaining.get_mut(&w).expect("edge endpoint").remove(&v);
                    stack.push(w);
                }
                None => {
                    stack.pop();
                    trail.push(v);
                }
            }
        }
        trail.reverse();
        debug!(len = trail.len(), "built Eulerian trail");
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_trail(graph: &UndirectedGraph<u32>, trail: &[u32]) {
        assert_eq!(trail.len(), graph.edge_count() + 1);
        let mut used: HashSet<(u32, u32)> = HashSet::new();
        for pair in trail.windows(2) {
            assert!(graph.has_edge(&pair[0], &pair[1]));
            let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            assert!(used.insert(key), "edge {key:?} used twice");
        }
        assert_eq!(used.len(), graph.edge_count());
    }

    #[test]
    fn single_edge_path_has_two_element_trail() {
        let graph = UndirectedGraph::from_edges([(0, 1)]);
        let trail = graph.euler_trail();
        assert_eq!(trail.len(), 2);
        assert_is_trail(&graph, &trail);
    }

    #[test]
    fn cycle_has_a_circuit() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let trail = graph.euler_trail_between(&2, &2);
        assert_eq!(trail.first(), Some(&2));
        assert_eq!(trail.last(), Some(&2));
        assert_is_trail(&graph, &trail);
    }

    #[test]
    fn bowtie_has_a_circuit_through_the_waist() {
        // Two triangles sharing vertex 2; every degree is even.
        let graph =
            UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let trail = graph.euler_trail();
        assert_is_trail(&graph, &trail);
        assert_eq!(trail.first(), trail.last());
    }

    #[test]
    fn open_trail_runs_between_the_odd_vertices() {
        // Path 0-1-2 with a triangle on 2-3-4: odd degrees at 0 and 2.
        let graph =
            UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 2)]);
        let trail = graph.euler_trail();
        assert_is_trail(&graph, &trail);
        let ends = HashSet::from([trail[0], *trail.last().unwrap()]);
        assert_eq!(ends, HashSet::from([0, 2]));
    }

    #[test]
    fn wrong_endpoints_are_infeasible() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        // Odd vertices are 0 and 2; a circuit from 1 cannot exist.
        assert!(graph.euler_trail_between(&1, &1).is_empty());
        assert!(graph.euler_trail_between(&0, &1).is_empty());
        assert_eq!(graph.euler_trail_between(&0, &2).len(), 3);
    }

    #[test]
    fn four_odd_vertices_are_infeasible() {
        let graph = UndirectedGraph::from_edges([(0, 1), (2, 3)]);
        assert!(graph.euler_trail().is_empty());
        assert!(graph.euler_trail_between(&0, &1).is_empty());
    }

    #[test]
    fn disconnected_even_graph_is_infeasible() {
        let graph =
            UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (5, 6), (6, 7), (7, 5)]);
        assert!(graph.euler_trail().is_empty());
        assert!(graph.euler_trail_between(&0, &0).is_empty());
    }

    #[test]
    fn edgeless_trails_are_single_vertices() {
        let mut graph = UndirectedGraph::new();
        graph.add_vertex(7);
        graph.add_vertex(8);
        assert_eq!(graph.euler_trail_between(&7, &7), vec![7]);
        assert!(graph.euler_trail_between(&7, &8).is_empty());
    }

    #[test]
    fn isolated_vertices_do_not_block_feasibility() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
        graph.add_vertex(99);
        let trail = graph.euler_trail();
        assert_is_trail(&graph, &trail);
    }

    #[test]
    fn isolated_start_with_edges_elsewhere_is_infeasible() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
        graph.add_vertex(99);
        assert!(graph.euler_trail_between(&99, &99).is_empty());
    }

    #[test]
    fn empty_graph_yields_empty_trail() {
        let graph: UndirectedGraph<u32> = UndirectedGraph::new();
        assert!(graph.euler_trail().is_empty());
    }

    #[test]
    fn unknown_endpoints_are_infeasible() {
        let graph = UndirectedGraph::from_edges([(0, 1)]);
        assert!(graph.euler_trail_between(&5, &5).is_empty());
    }
}
