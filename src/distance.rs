use std::collections::HashSet;

use crate::graph::Graph;
use crate::vertex::{VertexIndex, Weight};

/// Distance reported when no path joins the two vertices.
pub const UNREACHABLE: Weight = Weight::MAX;

/// A partial path from the start vertex, with the summed cost of every vertex on it.
struct Candidate {
    path: Vec<VertexIndex>,
    cost: Weight,
}

impl Candidate {
    fn last(&self) -> Option<VertexIndex> {
        self.path.last().copied()
    }
}

impl Graph {
    /// The cheapest cost of travelling from `start` to `end`.
    ///
    /// Edges are free; entering a vertex costs its [`extra_cost`](crate::Vertex::extra_cost). The cost of a path is
    /// therefore the sum of the costs of its vertices, the start vertex excluded. `distance(v, v)` is 0.
    ///
    /// Returns [`UNREACHABLE`] if no path exists or either vertex is missing from this graph.
    ///
    /// # Search
    /// Candidate paths grow from `start`. The path ending at the current vertex is extended to each neighbor not yet
    /// visited and then retired; the cheapest candidate overall, earliest on ties, becomes the current path. A vertex
    /// is never expanded towards again once it has been current.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn distance(&self, start: VertexIndex, end: VertexIndex) -> Weight {
        let (Some(start_vertex), true) = (self.vertex(start), self.contains(end)) else {
            return UNREACHABLE;
        };

        let mut candidates = vec![Candidate { path: vec![start], cost: start_vertex.extra_cost() }];
        let mut visited = HashSet::new();
        let mut current = start;
        let mut best = 0;

        while current != end {
            visited.insert(current);

            let Some(position) = candidates.iter().position(|candidate| candidate.last() == Some(current)) else {
                return UNREACHABLE;
            };
            let expanded = candidates.remove(position);

            for neighbor in self.neighbors(current).filter(|neighbor| !visited.contains(neighbor)) {
                let entry_cost = self.vertex(neighbor).map_or(0, |vertex| vertex.extra_cost());
                let mut path = expanded.path.clone();
                path.push(neighbor);
                candidates.push(Candidate { path, cost: expanded.cost.saturating_add(entry_cost) });
            }

            // first minimum wins, i.e. the oldest candidate on ties
            let Some(cheapest) = candidates.iter()
                .enumerate()
                .min_by_key(|(_, candidate)| candidate.cost)
                .map(|(position, _)| position) else {
                tracing::trace!(start, end, "frontier exhausted");
                return UNREACHABLE;
            };

            let chosen = &candidates[cheapest];
            current = chosen.last().unwrap_or(start);
            best = chosen.cost.saturating_sub(start_vertex.extra_cost());
        }

        best
    }

    /// The cheapest cost of travelling to `end` from any vertex of `starts`; see [`Graph::distance`].
    ///
    /// Returns [`UNREACHABLE`] if `starts` is empty or no start reaches `end`.
    pub fn distance_from_set(&self, starts: impl IntoIterator<Item = VertexIndex>, end: VertexIndex) -> Weight {
        starts.into_iter()
            .map(|start| self.distance(start, end))
            .min()
            .unwrap_or(UNREACHABLE)
    }
}
