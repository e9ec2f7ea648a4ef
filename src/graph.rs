use crate::{
    error::GraphError,
    search::{BfsIterator, DfsIterator},
    vertex::Vertex,
};

/// The query vocabulary shared by the undirected and directed stores.
///
/// Both store types implement this trait independently; there is no shared
/// base type, only the shared contract. `successors` is the traversal
/// seam: neighbors for the undirected store, out-neighbors for the
/// directed one, and an empty vector for a vertex that is not a member.
///
/// Algorithms built on this trait only read the graph; none of them
/// mutate the store they analyze.
pub trait Graph {
    type Vertex: Vertex;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges (arcs, for the directed store).
    fn edge_count(&self) -> usize;

    /// True if `v` is a member of the vertex set.
    fn contains(&self, v: &Self::Vertex) -> bool;

    /// All vertices, in an unspecified order that is stable between
    /// mutations.
    fn iter_vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// The vertices reachable from `v` by one edge, in an unspecified
    /// stable order. Empty if `v` is not a member.
    fn successors(&self, v: &Self::Vertex) -> Vec<Self::Vertex>;

    /// The degree of `v`. Fails with [`GraphError::UnknownVertex`] if `v`
    /// is not a member.
    fn degree(&self, v: &Self::Vertex) -> Result<usize, GraphError<Self::Vertex>>;

    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Performs a breadth-first traversal starting from the given vertex.
    fn bfs(&self, start: Self::Vertex) -> BfsIterator<'_, Self>
    where
        Self: Sized,
    {
        BfsIterator::new(self, vec![start])
    }

    /// Performs a depth-first traversal starting from the given vertex.
    fn dfs(&self, start: Self::Vertex) -> DfsIterator<'_, Self>
    where
        Self: Sized,
    {
        DfsIterator::new(self, vec![start])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{directed::DirectedGraph, undirected::UndirectedGraph};

    fn member_count<G: Graph>(graph: &G) -> usize {
        graph.iter_vertices().filter(|v| graph.contains(v)).count()
    }

    #[test]
    fn shared_vocabulary_spans_both_stores() {
        let undirected = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        assert_eq!(member_count(&undirected), 3);
        assert_eq!(undirected.degree(&1), Ok(2));
        assert_eq!(undirected.edge_count(), 2);

        let directed = DirectedGraph::from_arcs([(0, 1), (1, 2)]);
        assert_eq!(member_count(&directed), 3);
        assert_eq!(directed.degree(&1), Ok(2));
        assert_eq!(directed.arc_count(), 2);
    }

    #[test]
    fn traversals_follow_arc_direction() {
        let directed = DirectedGraph::from_arcs([(0, 1), (0, 2), (2, 3)]);
        assert_eq!(directed.bfs(0).count(), 4);
        assert_eq!(directed.dfs(0).count(), 4);
        assert_eq!(directed.bfs(3).count(), 1);
    }
}
