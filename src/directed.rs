use std::collections::{HashMap, HashSet};

use crate::{error::GraphError, graph::Graph, undirected::UndirectedGraph, vertex::Vertex};

/// A directed graph keyed by vertex values.
///
/// Stores two adjacency maps, out-neighbors and in-neighbors, so that
/// removing a vertex only walks its own neighborhoods instead of scanning
/// the whole vertex set. Every member vertex has an entry in both maps.
///
/// Self-arcs are gated by a loop-permission flag, permissive by default.
/// Arc counts are derived from the adjacency maps; there is no separate
/// counter to drift.
#[derive(Clone, Debug)]
pub struct DirectedGraph<V: Vertex> {
    out: HashMap<V, HashSet<V>>,
    inc: HashMap<V, HashSet<V>>,
    loops_allowed: bool,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Creates an empty graph that permits self-arcs.
    pub fn new() -> Self {
        Self {
            out: HashMap::new(),
            inc: HashMap::new(),
            loops_allowed: true,
        }
    }

    /// Creates an empty graph that refuses self-arcs.
    pub fn new_forbidding_loops() -> Self {
        Self {
            loops_allowed: false,
            ..Self::new()
        }
    }

    /// Bulk constructor: inserts every listed arc, adding missing
    /// endpoints along the way.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (V, V)>) -> Self {
        let mut graph = Self::new();
        for (u, w) in arcs {
            graph.add_arc(u, w);
        }
        graph
    }

    /// Inserts `v` if absent, allocating both adjacency entries. Returns
    /// whether it was newly inserted.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.out.contains_key(&v) {
            return false;
        }
        self.out.insert(v.clone(), HashSet::new());
        self.inc.insert(v, HashSet::new());
        true
    }

    /// Inserts the arc `u -> w`, adding missing endpoints first. Returns
    /// `false` without mutating if the arc already exists, or if `u == w`
    /// and loops are forbidden.
    pub fn add_arc(&mut self, u: V, w: V) -> bool {
        if u == w && !self.loops_allowed {
            return false;
        }
        self.add_vertex(u.clone());
        self.add_vertex(w.clone());
        let inserted = self.out.get_mut(&u).expect("member vertex").insert(w.clone());
        if inserted {
            self.inc.get_mut(&w).expect("member vertex").insert(u);
        }
        inserted
    }

    /// Removes `v` and every incident arc. Returns `false` if absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(targets) = self.out.remove(v) else {
            return false;
        };
        let sources = self.inc.remove(v).expect("maps share a key set");
        for w in targets {
            if let Some(entry) = self.inc.get_mut(&w) {
                entry.remove(v);
            }
        }
        for u in sources {
            if let Some(entry) = self.out.get_mut(&u) {
                entry.remove(v);
            }
        }
        true
    }

    /// Removes the arc `u -> w`. Returns `false` if absent.
    pub fn remove_arc(&mut self, u: &V, w: &V) -> bool {
        let removed = self.out.get_mut(u).is_some_and(|set| set.remove(w));
        if removed {
            self.inc.get_mut(w).expect("member vertex").remove(u);
        }
        removed
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.out.contains_key(v)
    }

    pub fn has_arc(&self, u: &V, w: &V) -> bool {
        self.out.get(u).is_some_and(|set| set.contains(w))
    }

    /// The out-neighbors of `v`. Fails with [`GraphError::UnknownVertex`]
    /// if `v` is not a member.
    pub fn out_neighbors(&self, v: &V) -> Result<Vec<V>, GraphError<V>> {
        self.out
            .get(v)
            .map(|set| set.iter().cloned().collect())
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    /// The in-neighbors of `v`. Fails with [`GraphError::UnknownVertex`]
    /// if `v` is not a member.
    pub fn in_neighbors(&self, v: &V) -> Result<Vec<V>, GraphError<V>> {
        self.inc
            .get(v)
            .map(|set| set.iter().cloned().collect())
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    pub fn out_degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.out
            .get(v)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    pub fn in_degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.inc
            .get(v)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    /// `in_degree + out_degree`. A self-arc contributes to both.
    pub fn degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        Ok(self.in_degree(v)? + self.out_degree(v)?)
    }

    pub fn vertex_count(&self) -> usize {
        self.out.len()
    }

    pub fn arc_count(&self) -> usize {
        self.out.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.out.keys()
    }

    /// All arcs as `(tail, head)` pairs.
    pub fn arcs(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.out
            .iter()
            .flat_map(|(u, targets)| targets.iter().map(move |w| (u, w)))
    }

    /// All vertices in ascending order.
    pub fn vertex_list(&self) -> Vec<V>
    where
        V: Ord,
    {
        let mut list: Vec<V> = self.out.keys().cloned().collect();
        list.sort();
        list
    }

    /// All arcs in ascending `(tail, head)` order.
    pub fn arc_list(&self) -> Vec<(V, V)>
    where
        V: Ord,
    {
        let mut list: Vec<(V, V)> = self
            .arcs()
            .map(|(u, w)| (u.clone(), w.clone()))
            .collect();
        list.sort();
        list
    }

    pub fn loops_allowed(&self) -> bool {
        self.loops_allowed
    }

    /// Permits self-arcs in future `add_arc` calls.
    pub fn allow_loops(&mut self) {
        self.loops_allowed = true;
    }

    /// Forbids self-arcs and purges any existing ones.
    pub fn forbid_loops(&mut self) {
        self.loops_allowed = false;
        let looped: Vec<V> = self
            .out
            .iter()
            .filter(|&(v, targets)| targets.contains(v))
            .map(|(v, _)| v.clone())
            .collect();
        for v in looped {
            self.remove_arc(&v, &v);
        }
    }

    /// Produces an undirected graph over the same vertex set with one edge
    /// per arc pair, ignoring direction and collapsing self-arcs away.
    pub fn simplify(&self) -> UndirectedGraph<V> {
        let mut graph = UndirectedGraph::new();
        for v in self.out.keys() {
            graph.add_vertex(v.clone());
        }
        for (u, w) in self.arcs() {
            graph.add_edge(u.clone(), w.clone());
        }
        graph
    }
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two graphs are equal iff their vertex sets and arc sets are equal as
/// sets. The loop-permission flag gates future mutation, not current
/// shape, and is ignored.
impl<V: Vertex> PartialEq for DirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.out == other.out
    }
}

impl<V: Vertex> Eq for DirectedGraph<V> {}

impl<V: Vertex> Graph for DirectedGraph<V> {
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.arc_count()
    }

    fn contains(&self, v: &V) -> bool {
        self.has_vertex(v)
    }

    fn iter_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices()
    }

    fn successors(&self, v: &V) -> Vec<V> {
        self.out
            .get(v)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.degree(v)
    }
}

#[cfg(feature = "pathfinding")]
impl<V: Vertex> DirectedGraph<V> {
    /// Partitions the vertex set into strongly connected components.
    pub fn strongly_connected_components(&self) -> Vec<Vec<V>> {
        pathfinding::prelude::strongly_connected_components(
            &self.vertices().cloned().collect::<Vec<_>>(),
            |v| self.successors(v),
        )
    }

    /// The strongly connected component containing the given vertex.
    pub fn strongly_connected_component_of(&self, v: &V) -> Vec<V> {
        pathfinding::prelude::strongly_connected_component(v, |v| self.successors(v))
    }
}
