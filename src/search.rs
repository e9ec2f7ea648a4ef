use std::collections::{HashSet, VecDeque};

use crate::graph::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// A lazy breadth-first traversal over any [`Graph`], visiting each
/// reachable vertex exactly once in layer order.
///
/// A start vertex that is not a member of the graph is yielded as if
/// isolated; callers that care check membership first.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::Vertex>) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            queue: start.into(),
        }
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.queue.pop_front() {
            if !self.visited.insert(v.clone()) {
                continue;
            }
            for next in self.graph.successors(&v) {
                if !self.visited.contains(&next) {
                    self.queue.push_back(next);
                }
            }
            return Some(v);
        }
        None
    }
}

/// A lazy depth-first traversal over any [`Graph`].
pub struct DfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::Vertex>,
    stack: Vec<G::Vertex>,
}

impl<'g, G> DfsIterator<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G, start: Vec<G::Vertex>) -> Self {
        let mut stack = start;
        stack.reverse();
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack,
        }
    }
}

impl<'g, G> Iterator for DfsIterator<'g, G>
where
    G: Graph,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(v) = self.stack.pop() {
            if self.visited.insert(v.clone()) {
                let mut successors = self.graph.successors(&v);
                successors.reverse();
                self.stack.extend(successors);
                return Some(v);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::undirected::UndirectedGraph;

    fn create_simple_graph() -> UndirectedGraph<u32> {
        UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 3)])
    }

    fn create_cyclic_graph() -> UndirectedGraph<u32> {
        UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)])
    }

    #[test]
    fn bfs_visits_all_reachable() {
        let graph = create_simple_graph();
        let visited: HashSet<_> = graph.bfs(0).collect();
        assert_eq!(visited, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn bfs_layer_order() {
        let graph = create_simple_graph();
        let visited: Vec<_> = graph.bfs(0).collect();
        assert_eq!(visited[0], 0);
        assert!(visited[1] == 1 || visited[1] == 2);
        assert!(visited[2] == 1 || visited[2] == 2);
        assert_eq!(visited[3], 3);
    }

    #[test]
    fn bfs_handles_cycles() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.bfs(0).count(), 3);
    }

    #[test]
    fn bfs_stays_in_component() {
        let mut graph = create_simple_graph();
        graph.add_edge(7, 8);
        let visited: HashSet<_> = graph.bfs(7).collect();
        assert_eq!(visited, HashSet::from([7, 8]));
    }

    #[test]
    fn dfs_visits_all_reachable() {
        let graph = create_simple_graph();
        let visited: HashSet<_> = graph.dfs(0).collect();
        assert_eq!(visited, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn dfs_handles_cycles() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.dfs(0).count(), 3);
    }

    #[test]
    fn bfs_dfs_visit_same_vertices() {
        let graph = create_simple_graph();
        let bfs_visited: HashSet<_> = graph.bfs(0).collect();
        let dfs_visited: HashSet<_> = graph.dfs(0).collect();
        assert_eq!(bfs_visited, dfs_visited);
    }

    #[test]
    fn empty_start_yields_nothing() {
        let graph = create_simple_graph();
        assert_eq!(BfsIterator::new(&graph, vec![]).count(), 0);
        assert_eq!(DfsIterator::new(&graph, vec![]).count(), 0);
    }
}
