use std::collections::{HashMap, HashSet, VecDeque};

use rand::seq::SliceRandom;

use crate::{
    error::GraphError, tracing_support::debug, undirected::UndirectedGraph, vertex::Vertex,
};

/// The number of distinct colors used by a coloring.
pub fn color_count<V, C>(coloring: &HashMap<V, C>) -> usize
where
    C: Eq + std::hash::Hash,
{
    coloring.values().collect::<HashSet<_>>().len()
}

/// Vertex-coloring algorithms: bipartite two-coloring and greedy proper
/// coloring. All of them only read the store.
impl<V: Vertex> UndirectedGraph<V> {
    /// Assigns colors `1`/`2` so that no edge joins equal colors, seeding
    /// an arbitrary vertex of each component with `1` and propagating the
    /// opposite color breadth-first. Fails with
    /// [`GraphError::NotBipartite`] the moment an already-colored
    /// neighbor matches its own color, which happens iff some component
    /// contains an odd cycle.
    pub fn two_color(&self) -> Result<HashMap<V, u8>, GraphError<V>> {
        let mut colors: HashMap<V, u8> = HashMap::new();
        for seed in self.vertices() {
            if colors.contains_key(seed) {
                continue;
            }
            colors.insert(seed.clone(), 1);
            let mut queue = VecDeque::from([seed.clone()]);
            while let Some(v) = queue.pop_front() {
                let opposite = 3 - colors[&v];
                for next in self.neighbors(&v).expect("member vertex") {
                    match colors.get(&next) {
                        None => {
                            colors.insert(next.clone(), opposite);
                            queue.push_back(next);
                        }
                        Some(&c) if c != opposite => {
                            debug!(?v, ?next, "odd cycle detected");
                            return Err(GraphError::NotBipartite);
                        }
                        Some(_) => {}
                    }
                }
            }
        }
        Ok(colors)
    }

    /// The two color classes of [`two_color`](Self::two_color).
    pub fn bipartition(&self) -> Result<(HashSet<V>, HashSet<V>), GraphError<V>> {
        let colors = self.two_color()?;
        let mut left = HashSet::new();
        let mut right = HashSet::new();
        for (v, color) in colors {
            if color == 1 {
                left.insert(v);
            } else {
                right.insert(v);
            }
        }
        Ok((left, right))
    }

    /// Greedy proper coloring in the given vertex order: each vertex gets
    /// the smallest positive color not already on a neighbor, so at most
    /// `max_degree + 1` colors are ever used.
    ///
    /// `order` must be a permutation of the vertex set. This is a caller
    /// obligation, not a runtime-checked invariant; a partial or
    /// repetitive order yields a partial result.
    pub fn greedy_color_in_order(&self, order: &[V]) -> HashMap<V, usize> {
        let mut colors: HashMap<V, usize> = HashMap::with_capacity(order.len());
        for v in order {
            let taken: HashSet<usize> = self
                .neighbors(v)
                .expect("order must list member vertices")
                .iter()
                .filter_map(|n| colors.get(n).copied())
                .collect();
            let mut color = 1;
            while taken.contains(&color) {
                color += 1;
            }
            colors.insert(v.clone(), color);
        }
        colors
    }

    /// Greedy proper coloring in descending-degree order. Ties are broken
    /// arbitrarily but deterministically within one run.
    pub fn greedy_color(&self) -> HashMap<V, usize> {
        let mut order: Vec<V> = self.vertices().cloned().collect();
        order.sort_by_key(|v| std::cmp::Reverse(self.degree(v).expect("member vertex")));
        let colors = self.greedy_color_in_order(&order);
        debug!(colors = color_count(&colors), "greedy coloring done");
        colors
    }

    /// Runs [`greedy_color`](Self::greedy_color) plus `reps` runs over
    /// independent random vertex orders and keeps the coloring with the
    /// fewest distinct colors; the first coloring found wins ties.
    pub fn random_greedy_color(&self, reps: usize) -> HashMap<V, usize> {
        self.random_greedy_color_with_rng(reps, &mut rand::rng())
    }

    /// [`random_greedy_color`](Self::random_greedy_color) with a caller
    /// supplied generator, so results can be reproduced from a seed.
    pub fn random_greedy_color_with_rng(
        &self,
        reps: usize,
        rng: &mut impl rand::Rng,
    ) -> HashMap<V, usize> {
        let mut best = self.greedy_color();
        let mut order: Vec<V> = self.vertices().cloned().collect();
        for _ in 0..reps {
            order.shuffle(rng);
            let candidate = self.greedy_color_in_order(&order);
            if color_count(&candidate) < color_count(&best) {
                best = candidate;
            }
        }
        best
    }
}
