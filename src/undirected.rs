use std::collections::{HashMap, HashSet};

use crate::{error::GraphError, graph::Graph, pairs::UnorderedPair, vertex::Vertex};

/// An undirected graph keyed by vertex values.
///
/// Holds a vertex set, an edge set of [`UnorderedPair`]s, and an optional
/// fast-neighbor index. Edges connect distinct member vertices; self-loops
/// are forbidden and each unordered pair carries at most one edge.
///
/// The fast-neighbor index is a derived, redundant mapping from vertex to
/// neighbor set, maintained on the same mutation path as the edge set. It
/// trades roughly one extra copy of the edge list for O(1)-amortized
/// neighbor and adjacency queries instead of an edge-set scan. Toggling it
/// never changes query results, only their cost.
///
/// Mutations report a no-op attempt (already present, already absent, or
/// `u == w`) as `false`; only queries signal errors.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<V: Vertex> {
    vertices: HashSet<V>,
    edges: HashSet<UnorderedPair<V>>,
    index: Option<HashMap<V, HashSet<V>>>,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Creates an empty graph without the fast-neighbor index.
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: HashSet::new(),
            index: None,
        }
    }

    /// Creates an empty graph with the fast-neighbor index enabled.
    pub fn with_fast_index() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: HashSet::new(),
            index: Some(HashMap::new()),
        }
    }

    /// Bulk constructor: inserts every listed edge, adding missing
    /// endpoints along the way. Loops and duplicates are skipped like any
    /// other no-op `add_edge`.
    pub fn from_edges(edges: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (u, w) in edges {
            graph.add_edge(u, w);
        }
        graph
    }

    /// Inserts `v` if absent; returns whether it was newly inserted.
    pub fn add_vertex(&mut self, v: V) -> bool {
        self.vertices.insert(v)
    }

    /// Inserts the edge `{u, w}`, adding missing endpoints first. Returns
    /// `false` without mutating if `u == w` or the edge already exists.
    pub fn add_edge(&mut self, u: V, w: V) -> bool {
        if u == w || self.edges.contains(&UnorderedPair::new(u.clone(), w.clone())) {
            return false;
        }
        self.vertices.insert(u.clone());
        self.vertices.insert(w.clone());
        if let Some(index) = &mut self.index {
            index.entry(u.clone()).or_default().insert(w.clone());
            index.entry(w.clone()).or_default().insert(u.clone());
        }
        self.edges.insert(UnorderedPair::new(u, w))
    }

    /// Removes `v` and every incident edge. Returns `false` if absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if !self.vertices.contains(v) {
            return false;
        }
        for neighbor in self.neighbors_of(v) {
            self.remove_edge(v, &neighbor);
        }
        self.vertices.remove(v)
    }

    /// Removes the edge `{u, w}` in both orientations. Returns `false` if
    /// absent.
    pub fn remove_edge(&mut self, u: &V, w: &V) -> bool {
        let removed = self
            .edges
            .remove(&UnorderedPair::new(u.clone(), w.clone()));
        if removed && let Some(index) = &mut self.index {
            for (a, b) in [(u, w), (w, u)] {
                if let Some(entry) = index.get_mut(a) {
                    entry.remove(b);
                    if entry.is_empty() {
                        index.remove(a);
                    }
                }
            }
        }
        removed
    }

    /// Contracts `w` into `u`: every edge `{w, x}` with `x != u` becomes
    /// `{u, x}` (duplicates collapse, the `{u, w}` edge disappears), then
    /// `w` is removed. Returns `false` if `u == w` or either vertex is
    /// absent.
    ///
    /// Reduces the vertex count by exactly one and never increases the
    /// edge count.
    pub fn contract(&mut self, u: &V, w: &V) -> bool {
        if u == w || !self.vertices.contains(u) || !self.vertices.contains(w) {
            return false;
        }
        let absorbed = self.neighbors_of(w);
        self.remove_vertex(w);
        for x in absorbed {
            if x != *u {
                self.add_edge(u.clone(), x);
            }
        }
        true
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    pub fn has_edge(&self, u: &V, w: &V) -> bool {
        self.edges.contains(&UnorderedPair::new(u.clone(), w.clone()))
    }

    /// The neighbors of `v`, in an unspecified order that is stable
    /// between mutations. Fails with [`GraphError::UnknownVertex`] if `v`
    /// is not a member. Uses the fast index when active, otherwise scans
    /// the edge set.
    pub fn neighbors(&self, v: &V) -> Result<Vec<V>, GraphError<V>> {
        if !self.vertices.contains(v) {
            return Err(GraphError::UnknownVertex(v.clone()));
        }
        Ok(self.neighbors_of(v))
    }

    /// The neighbors of `v` in ascending order.
    pub fn sorted_neighbors(&self, v: &V) -> Result<Vec<V>, GraphError<V>>
    where
        V: Ord,
    {
        let mut neighbors = self.neighbors(v)?;
        neighbors.sort();
        Ok(neighbors)
    }

    /// Membership-unchecked neighbor lookup, shared by queries and
    /// traversal. An absent vertex has no neighbors.
    fn neighbors_of(&self, v: &V) -> Vec<V> {
        match &self.index {
            Some(index) => index
                .get(v)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
            None => self
                .edges
                .iter()
                .filter_map(|pair| pair.other(v).cloned())
                .collect(),
        }
    }

    /// The degree of `v`. Fails with [`GraphError::UnknownVertex`] if `v`
    /// is not a member.
    pub fn degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        if !self.vertices.contains(v) {
            return Err(GraphError::UnknownVertex(v.clone()));
        }
        Ok(match &self.index {
            Some(index) => index.get(v).map_or(0, HashSet::len),
            None => self.edges.iter().filter(|pair| pair.contains(v)).count(),
        })
    }

    /// The whole-graph degree sequence, descending.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self
            .vertices
            .iter()
            .map(|v| self.degree(v).expect("member vertex"))
            .collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in an unspecified order that is stable between
    /// mutations.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// All edges as endpoint pairs, internal orientation.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.edges.iter().map(|pair| (pair.first(), pair.second()))
    }

    /// All vertices in ascending order.
    pub fn vertex_list(&self) -> Vec<V>
    where
        V: Ord,
    {
        let mut list: Vec<V> = self.vertices.iter().cloned().collect();
        list.sort();
        list
    }

    /// All edges in canonical (lesser-first) orientation, ascending.
    pub fn edge_list(&self) -> Vec<(V, V)>
    where
        V: Ord,
    {
        let mut list: Vec<(V, V)> = self.edges.iter().map(UnorderedPair::as_sorted).collect();
        list.sort();
        list
    }

    /// Toggles the fast-neighbor index, rebuilding it from the edge set
    /// when turning on and discarding it when turning off. Query results
    /// are unaffected.
    pub fn set_fast_index(&mut self, enabled: bool) {
        if !enabled {
            self.index = None;
            return;
        }
        if self.index.is_some() {
            return;
        }
        let mut index: HashMap<V, HashSet<V>> = HashMap::new();
        for pair in &self.edges {
            let (u, w) = (pair.first(), pair.second());
            index.entry(u.clone()).or_default().insert(w.clone());
            index.entry(w.clone()).or_default().insert(u.clone());
        }
        self.index = Some(index);
    }

    pub fn has_fast_index(&self) -> bool {
        self.index.is_some()
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two graphs are equal iff their vertex sets and edge sets are equal as
/// sets. The fast-index state is a cost concern, not part of the graph's
/// identity.
impl<V: Vertex> PartialEq for UndirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl<V: Vertex> Eq for UndirectedGraph<V> {}

impl<V: Vertex> Graph for UndirectedGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count()
    }

    fn contains(&self, v: &V) -> bool {
        self.has_vertex(v)
    }

    fn iter_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices()
    }

    fn successors(&self, v: &V) -> Vec<V> {
        self.neighbors_of(v)
    }

    fn degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.degree(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_vertex(1));
        assert!(!graph.add_vertex(1));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_inserts_missing_endpoints() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge("a", "b"));
        assert!(graph.has_vertex(&"a"));
        assert!(graph.has_vertex(&"b"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_refuses_loops_and_duplicates() {
        let mut graph = UndirectedGraph::new();
        assert!(!graph.add_edge(1, 1));
        assert!(graph.is_empty());
        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 2));
        assert!(!graph.add_edge(2, 1));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn has_edge_is_symmetric() {
        let graph = UndirectedGraph::from_edges([(1, 2)]);
        assert!(graph.has_edge(&1, &2));
        assert!(graph.has_edge(&2, &1));
        assert!(!graph.has_edge(&1, &3));
    }

    #[test]
    fn remove_vertex_removes_incident_edges() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 2)]);
        assert!(graph.remove_vertex(&0));
        assert!(!graph.remove_vertex(&0));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&1, &2));
    }

    #[test]
    fn remove_edge_keeps_endpoints() {
        let mut graph = UndirectedGraph::from_edges([(0, 1)]);
        assert!(graph.remove_edge(&1, &0));
        assert!(!graph.remove_edge(&1, &0));
        assert!(graph.has_vertex(&0));
        assert!(graph.has_vertex(&1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbors_of_unknown_vertex_fails() {
        let graph = UndirectedGraph::from_edges([(0, 1)]);
        assert_eq!(graph.neighbors(&9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(graph.degree(&9), Err(GraphError::UnknownVertex(9)));
    }

    #[test]
    fn sorted_neighbors_ascending() {
        let graph = UndirectedGraph::from_edges([(5, 3), (5, 9), (5, 1)]);
        assert_eq!(graph.sorted_neighbors(&5).unwrap(), vec![1, 3, 9]);
    }

    #[test]
    fn degree_sequence_descending() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (0, 2), (0, 3)]);
        graph.add_vertex(9);
        assert_eq!(graph.degree_sequence(), vec![3, 1, 1, 1, 0]);
    }

    #[test]
    fn index_toggle_preserves_queries() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
        let before: Vec<_> = (0..4).map(|v| graph.sorted_neighbors(&v).unwrap()).collect();
        graph.set_fast_index(true);
        assert!(graph.has_fast_index());
        let with_index: Vec<_> = (0..4).map(|v| graph.sorted_neighbors(&v).unwrap()).collect();
        assert_eq!(before, with_index);
        graph.set_fast_index(false);
        assert!(!graph.has_fast_index());
    }

    #[test]
    fn index_tracks_mutations() {
        let mut graph = UndirectedGraph::with_fast_index();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.remove_edge(&0, &1);
        assert_eq!(graph.sorted_neighbors(&1).unwrap(), vec![2]);
        assert_eq!(graph.degree(&0).unwrap(), 0);
        graph.remove_vertex(&2);
        assert_eq!(graph.degree(&1).unwrap(), 0);
    }

    #[test]
    fn equality_ignores_index_state() {
        let mut a = UndirectedGraph::from_edges([(0, 1), (1, 2)]);
        let b = UndirectedGraph::from_edges([(2, 1), (1, 0)]);
        a.set_fast_index(true);
        assert_eq!(a, b);
        a.add_edge(0, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn clones_are_independent() {
        let mut graph = UndirectedGraph::from_edges([(0, 1)]);
        let copy = graph.clone();
        graph.add_edge(1, 2);
        assert_eq!(copy.edge_count(), 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn contract_merges_neighborhoods() {
        // Triangle plus a pendant on w: contracting w into u keeps the
        // pendant reachable and collapses the shared edges.
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
        assert!(graph.contract(&0, &1));
        assert_eq!(graph.vertex_count(), 3);
        assert!(graph.has_edge(&0, &2));
        assert!(graph.has_edge(&0, &3));
        assert!(!graph.has_vertex(&1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn contract_rejects_noops() {
        let mut graph = UndirectedGraph::from_edges([(0, 1)]);
        assert!(!graph.contract(&0, &0));
        assert!(!graph.contract(&0, &7));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn contract_reduces_vertex_count_by_one() {
        let mut graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let vertices = graph.vertex_count();
        let edges = graph.edge_count();
        assert!(graph.contract(&0, &2));
        assert_eq!(graph.vertex_count(), vertices - 1);
        assert!(graph.edge_count() <= edges);
    }

    #[test]
    fn edge_list_is_canonical() {
        let graph = UndirectedGraph::from_edges([(3, 1), (2, 0), (1, 0)]);
        assert_eq!(graph.edge_list(), vec![(0, 1), (0, 2), (1, 3)]);
        assert_eq!(graph.vertex_list(), vec![0, 1, 2, 3]);
    }
}
