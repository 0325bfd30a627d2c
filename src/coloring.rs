use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::graph::Graph;
use crate::vertex::VertexIndex;

/// A color class identifier.
pub type Color = usize;

/// A coloring as independent sets: every color in use, mapped to the vertices holding it.
pub type Coloring = BTreeMap<Color, BTreeSet<VertexIndex>>;

/// Degree from which a vertex is preferred as the seed of [`Graph::planar_coloring`].
const PLANAR_SEED_DEGREE: usize = 6;

/// Minimum number of colored neighbors for a vertex to join a [`Graph::planar_coloring`] sweep.
const PLANAR_SWEEP_COLORED_NEIGHBORS: usize = 2;

impl Graph {
    /// A greedy proper coloring.
    ///
    /// Vertices are colored by descending degree, then ascending index, each with the smallest color in
    /// `0..=max_degree` that no colored neighbor holds.
    pub fn greedy_coloring(&self) -> Coloring {
        let order = self.indices()
            .sorted_by_key(|index| (Reverse(self.degree(*index)), *index))
            .collect_vec();

        let mut colors = BTreeMap::new();
        for index in order {
            let color = self.smallest_free_color(index, &colors);
            colors.insert(index, color);
        }

        into_classes(colors)
    }

    /// A proper coloring tuned for board graphs, which are planar.
    ///
    /// Starts from a vertex of degree 6 or more if there is one (otherwise the lowest index) colored 0, then
    /// repeatedly colors, with the smallest free color, every uncolored vertex bordering the colored region that has at
    /// least two colored neighbors. When no vertex qualifies, a single vertex is colored instead: the first uncolored
    /// neighbor of the colored region, or failing that (another component) the lowest uncolored index.
    ///
    /// Only meant to be close to optimal on board graphs; on general graphs it is merely proper.
    #[tracing::instrument(level = "debug", skip(self), fields(order = self.vertex_count()))]
    pub fn planar_coloring(&self) -> Coloring {
        let Some(seed) = self.indices()
            .find(|index| self.degree(*index) >= PLANAR_SEED_DEGREE)
            .or_else(|| self.indices().next()) else {
            return Coloring::new();
        };

        let mut colors = BTreeMap::from([(seed, 0)]);
        while colors.len() < self.vertex_count() {
            let frontier = colors.keys()
                .flat_map(|colored| self.neighbors(*colored))
                .filter(|neighbor| !colors.contains_key(neighbor))
                .unique()
                .collect_vec();

            let mut batch = frontier.iter()
                .copied()
                .filter(|index| {
                    self.neighbors(*index).filter(|neighbor| colors.contains_key(neighbor)).count()
                        >= PLANAR_SWEEP_COLORED_NEIGHBORS
                })
                .collect_vec();

            if batch.is_empty() {
                let fallback = frontier.first()
                    .copied()
                    .or_else(|| self.indices().find(|index| !colors.contains_key(index)));
                tracing::trace!(?fallback, "no vertex with enough colored neighbors");
                batch.extend(fallback);
            }

            for index in batch {
                let color = self.smallest_free_color(index, &colors);
                colors.insert(index, color);
            }
        }

        into_classes(colors)
    }

    fn smallest_free_color(&self, index: VertexIndex, colors: &BTreeMap<VertexIndex, Color>) -> Color {
        let taken: BTreeSet<Color> = self.neighbors(index)
            .filter_map(|neighbor| colors.get(&neighbor).copied())
            .collect();

        // a vertex has at most max_degree colored neighbors, so 0..=max_degree always has a free color
        (0..=self.max_degree())
            .find(|color| !taken.contains(color))
            .unwrap_or(taken.len())
    }
}

fn into_classes(colors: BTreeMap<VertexIndex, Color>) -> Coloring {
    let mut classes = Coloring::new();
    for (index, color) in colors {
        classes.entry(color).or_default().insert(index);
    }

    classes
}
