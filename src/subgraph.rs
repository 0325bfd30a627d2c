use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SearchConfig;
use crate::graph::Graph;
use crate::vertex::VertexIndex;

impl Graph {
    /// Whether this graph seems to contain a complete subgraph on `k` vertices.
    ///
    /// Every vertex in turn seeds a candidate clique. Each neighbor of the seed joins it when the seed is among that
    /// neighbor's "similar" neighbors: those sharing at least `k - 2` neighbors with it, as collected by a sweep which
    /// also follows every accepted vertex. The answer is yes as soon as a candidate reaches `k` vertices.
    ///
    /// This is a greedy approximation, not an enumeration of cliques: it can miss a clique that exists, and it can
    /// accept a seed whose neighbors each look clique-like without being pairwise adjacent.
    /// Sizes 0 to 2 are decided exactly.
    #[tracing::instrument(level = "debug", skip(self), fields(order = self.vertex_count()))]
    pub fn has_complete_subgraph(&self, k: usize) -> bool {
        match k {
            0 => return true,
            1 => return !self.is_empty(),
            2 => return self.edge_count() > 0,
            _ if k > self.vertex_count() => return false,
            _ => {}
        }

        if self.vertex_count() == k && self.is_complete() {
            return true;
        }

        let shared_needed = k - 2;
        for seed in self.indices() {
            let mut grown = 1;
            for neighbor in self.neighbors(seed) {
                let mut visited = HashSet::new();
                if self.similar_neighbors(neighbor, shared_needed, &mut visited).contains(&seed) {
                    grown += 1;
                    if grown == k {
                        tracing::debug!(seed, "candidate clique complete");
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Neighbors of `v` sharing at least `shared_needed` neighbors with `v`, among those not yet in `visited`.
    ///
    /// The sweep recurses from every accepted neighbor, and every vertex it looks at is added to `visited`, so later
    /// sweeps sharing the same set skip them.
    fn similar_neighbors(
        &self,
        v: VertexIndex,
        shared_needed: usize,
        visited: &mut HashSet<VertexIndex>,
    ) -> BTreeSet<VertexIndex> {
        let neighbors = self.neighbors(v).collect_vec();
        let mut similar = BTreeSet::new();

        for &candidate in &neighbors {
            if !visited.insert(candidate) {
                continue;
            }

            let shared = neighbors.iter()
                .filter(|other| self.is_neighbor(candidate, **other))
                .count();
            if shared >= shared_needed {
                similar.insert(candidate);
                // only the marks left on `visited` matter here
                self.similar_neighbors(candidate, shared_needed, visited);
            }
        }

        similar
    }

    /// Whether this graph seems to contain a subgraph matching `pattern`; see
    /// [`Graph::has_isomorphic_subgraph_with`].
    ///
    /// Randomness comes from `config.seed`, or from the operating system when no seed is set.
    pub fn has_isomorphic_subgraph(&self, pattern: &Graph, config: &SearchConfig) -> bool {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        self.has_isomorphic_subgraph_with(pattern, &mut rng, config.max_attempts)
    }

    /// Randomized search for a subgraph matching `pattern`.
    ///
    /// Each attempt deletes random vertices until as many remain as `pattern` has. A vertex set already tried is
    /// skipped; one whose induced subgraph has a lower minimum degree or a lower maximum degree than `pattern` is
    /// rejected. Otherwise the attempt succeeds if every edge of `pattern` is present at the same *position* (rank of
    /// the vertex in ascending index order) in the candidate. Vertices are never relabeled, so a pattern present only
    /// under another labeling is missed.
    ///
    /// After `max_attempts` random attempts, the vertex sets not tried yet are checked in lexicographic order, so
    /// `false` means every vertex set of the right size was tried. The empty pattern is always found; a pattern larger
    /// than `self` never is.
    #[tracing::instrument(
        level = "debug",
        skip(self, pattern, rng),
        fields(order = self.vertex_count(), pattern_order = pattern.vertex_count())
    )]
    pub fn has_isomorphic_subgraph_with<R: Rng>(&self, pattern: &Graph, rng: &mut R, max_attempts: usize) -> bool {
        if pattern.is_empty() {
            return true;
        }
        if pattern.vertex_count() > self.vertex_count() {
            return false;
        }

        let to_delete = self.vertex_count() - pattern.vertex_count();
        let subsets = binomial(self.vertex_count(), pattern.vertex_count());
        let wanted = Pattern::of(pattern);

        let mut tried: HashSet<Vec<VertexIndex>> = HashSet::new();
        for attempt in 0..max_attempts {
            if tried.len() >= subsets {
                tracing::debug!(attempt, "every vertex subset tried");
                return false;
            }

            // stays sorted, so equal sets compare equal
            let mut kept = self.indices().collect_vec();
            for _ in 0..to_delete {
                let position = rng.random_range(0..kept.len());
                kept.remove(position);
            }

            if !tried.insert(kept.clone()) {
                continue;
            }

            if self.matches_at(&kept, &wanted) {
                tracing::debug!(attempt, ?kept, "pattern found");
                return true;
            }
        }

        tracing::debug!(max_attempts, tried = tried.len(), "random attempts exhausted, checking the rest in order");
        let found = self.indices()
            .combinations(pattern.vertex_count())
            .filter(|kept| !tried.contains(kept))
            .find(|kept| self.matches_at(kept, &wanted));

        match found {
            Some(kept) => {
                tracing::debug!(?kept, "pattern found");
                true
            }
            None => false,
        }
    }

    /// Whether the subgraph induced by `kept`, in ascending index order, passes the degree bounds of `wanted` and
    /// holds every edge of `wanted` at the same position.
    fn matches_at(&self, kept: &[VertexIndex], wanted: &Pattern) -> bool {
        let degrees = kept.iter()
            .map(|u| kept.iter().filter(|v| self.is_neighbor(*u, **v)).count())
            .collect_vec();
        let (Some(&min), Some(&max)) = (degrees.iter().min(), degrees.iter().max()) else {
            return true;
        };
        if min < wanted.min_degree || max < wanted.max_degree {
            return false;
        }

        wanted.matrix.indexed_iter()
            .filter(|(_, edge)| **edge > 0)
            .all(|((row, column), _)| self.is_neighbor(kept[row], kept[column]))
    }
}

/// What a candidate vertex set is compared against.
struct Pattern {
    matrix: Array2<u8>,
    min_degree: usize,
    max_degree: usize,
}

impl Pattern {
    fn of(graph: &Graph) -> Self {
        Self {
            matrix: graph.adjacency_matrix(),
            min_degree: graph.min_degree(),
            max_degree: graph.max_degree(),
        }
    }
}

/// `n` choose `k`, saturating at `usize::MAX`.
fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);
    (0..k)
        .try_fold(1usize, |acc, i| acc.checked_mul(n - i).map(|product| product / (i + 1)))
        .unwrap_or(usize::MAX)
}
