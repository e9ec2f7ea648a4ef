use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    error::GraphError, graph::Graph, tracing_support::debug, undirected::UndirectedGraph,
    vertex::Vertex,
};

/// Connectivity and unweighted shortest-path queries.
///
/// Everything here only reads the store, except [`is_cut_edge`], whose
/// remove-probe-restore sequence takes `&mut self` so the exclusivity the
/// probe needs is structural.
///
/// [`is_cut_edge`]: UndirectedGraph::is_cut_edge
impl<V: Vertex> UndirectedGraph<V> {
    /// Partitions the vertex set into connected components. Isolated
    /// vertices form singleton components; every vertex lands in exactly
    /// one component.
    pub fn components(&self) -> Vec<HashSet<V>> {
        let mut assigned: HashSet<V> = HashSet::new();
        let mut components = Vec::new();
        for v in self.vertices() {
            if assigned.contains(v) {
                continue;
            }
            let component: HashSet<V> = self.bfs(v.clone()).collect();
            assigned.extend(component.iter().cloned());
            components.push(component);
        }
        debug!(count = components.len(), "computed connected components");
        components
    }

    /// True if `w` is reachable from `u` by some path.
    pub fn is_connected_pair(&self, u: &V, w: &V) -> bool {
        self.has_vertex(u) && self.bfs(u.clone()).any(|x| x == *w)
    }

    /// A shortest path from `u` to `w` by edge count, endpoints included.
    /// Empty if `w` is unreachable from `u`. Fails with
    /// [`GraphError::UnknownVertex`] if either endpoint is absent.
    ///
    /// Ties between equal-length paths are broken by discovery order,
    /// which is deterministic for a fixed neighbor-iteration order.
    pub fn shortest_path(&self, u: &V, w: &V) -> Result<Vec<V>, GraphError<V>> {
        for v in [u, w] {
            if !self.has_vertex(v) {
                return Err(GraphError::UnknownVertex(v.clone()));
            }
        }
        if u == w {
            return Ok(vec![u.clone()]);
        }

        let mut predecessor: HashMap<V, V> = HashMap::new();
        let mut queue = VecDeque::from([u.clone()]);
        let mut visited = HashSet::from([u.clone()]);
        'search: while let Some(v) = queue.pop_front() {
            for next in self.successors(&v) {
                if visited.insert(next.clone()) {
                    predecessor.insert(next.clone(), v.clone());
                    if next == *w {
                        break 'search;
                    }
                    queue.push_back(next);
                }
            }
        }

        if !predecessor.contains_key(w) {
            return Ok(Vec::new());
        }
        let mut path = vec![w.clone()];
        while let Some(prev) = predecessor.get(path.last().expect("nonempty")) {
            path.push(prev.clone());
        }
        path.reverse();
        Ok(path)
    }

    /// BFS layer numbers from `u`. Vertices unreachable from `u` are
    /// omitted from the map; the matrix form below maps them to `-1`
    /// instead, since it has a fixed shape. Fails with
    /// [`GraphError::UnknownVertex`] if `u` is absent.
    pub fn distances(&self, u: &V) -> Result<HashMap<V, usize>, GraphError<V>> {
        if !self.has_vertex(u) {
            return Err(GraphError::UnknownVertex(u.clone()));
        }
        let mut dist: HashMap<V, usize> = HashMap::from([(u.clone(), 0)]);
        let mut queue = VecDeque::from([u.clone()]);
        while let Some(v) = queue.pop_front() {
            let next_dist = dist[&v] + 1;
            for next in self.successors(&v) {
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), next_dist);
                    queue.push_back(next);
                }
            }
        }
        Ok(dist)
    }

    /// The all-pairs distance matrix, indexed by the position of each
    /// vertex in the ascending vertex list. Entry `-1` means unreachable;
    /// the diagonal is `0`.
    pub fn distance_matrix(&self) -> Vec<Vec<i64>>
    where
        V: Ord,
    {
        let vertices = self.vertex_list();
        let position: HashMap<&V, usize> =
            vertices.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let mut matrix = vec![vec![-1; vertices.len()]; vertices.len()];
        for (i, u) in vertices.iter().enumerate() {
            let from_u = self.distances(u).expect("member vertex");
            for (w, d) in from_u {
                matrix[i][position[&w]] = d as i64;
            }
        }
        matrix
    }

    /// The maximum finite pairwise distance, or `-1` if some pair has no
    /// path. The empty and single-vertex graphs have diameter `0`.
    pub fn diameter(&self) -> i64 {
        let total = self.vertex_count();
        let mut max = 0;
        for v in self.vertices() {
            let from_v = self.distances(v).expect("member vertex");
            if from_v.len() < total {
                debug!("graph is disconnected, diameter undefined");
                return -1;
            }
            max = max.max(*from_v.values().max().expect("contains the source"));
        }
        max as i64
    }

    /// True iff removing the edge `{u, w}` would increase the number of
    /// components, i.e. no alternate `u`-`w` path exists. Fails with
    /// [`GraphError::UnknownEdge`] if the edge is absent.
    ///
    /// The probe removes the edge, checks reachability, and restores the
    /// edge before returning on every path; the graph is observationally
    /// unchanged afterwards.
    pub fn is_cut_edge(&mut self, u: &V, w: &V) -> Result<bool, GraphError<V>> {
        if !self.has_edge(u, w) {
            return Err(GraphError::UnknownEdge(u.clone(), w.clone()));
        }
        self.remove_edge(u, w);
        let still_connected = self.is_connected_pair(u, w);
        self.add_edge(u.clone(), w.clone());
        debug!(cut = !still_connected, "probed edge removal");
        Ok(!still_connected)
    }
}
