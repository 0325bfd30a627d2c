use std::collections::HashSet;

use itertools::Itertools;
use strum::{Display, EnumString, VariantArray};

use crate::graph::Graph;

/// Structural properties a [`Graph`] may have.
///
/// See [`Graph::satisfies`] for the test behind each variant.
#[derive(Copy, Clone, Debug, Display, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum Structure {
    /// Every vertex is reachable from every other; see [`Graph::is_connected`].
    Connected,
    /// Every pair of vertices shares an edge; see [`Graph::is_complete`].
    Complete,
    /// A single path; see [`Graph::is_chain`].
    Chain,
    /// A single cycle; see [`Graph::is_cycle`].
    Cycle,
    /// Contains at least one cycle; see [`Graph::has_cycle`].
    Cyclic,
    /// See [`Graph::is_forest`].
    Forest,
    /// Some edge disconnects its component when removed; see [`Graph::has_bridge`].
    Bridged,
}

impl Graph {
    /// Whether this graph has the property `structure`.
    pub fn satisfies(&self, structure: Structure) -> bool {
        match structure {
            Structure::Connected => self.is_connected(),
            Structure::Complete => self.is_complete(),
            Structure::Chain => self.is_chain(),
            Structure::Cycle => self.is_cycle(),
            Structure::Cyclic => self.has_cycle(),
            Structure::Forest => self.is_forest(),
            Structure::Bridged => self.has_bridge(),
        }
    }

    /// Every [`Structure`] this graph satisfies, in declaration order.
    pub fn structures(&self) -> Vec<Structure> {
        Structure::VARIANTS.iter()
            .copied()
            .filter(|structure| self.satisfies(*structure))
            .collect_vec()
    }

    /// Whether every pair of distinct vertices shares an edge, i.e. there are `n(n-1)/2` edges.
    pub fn is_complete(&self) -> bool {
        let order = self.vertex_count();
        self.edge_count() == order * order.saturating_sub(1) / 2
    }

    /// Whether this graph is a single path.
    ///
    /// Graphs with fewer than two vertices are chains. Otherwise there must be exactly two vertices of degree 1,
    /// every other vertex has degree 2, and walking from one end must reach every vertex.
    pub fn is_chain(&self) -> bool {
        if self.vertex_count() < 2 {
            return true;
        }

        let mut ends = Vec::with_capacity(2);
        for index in self.indices() {
            match self.degree(index) {
                1 => ends.push(index),
                2 => {}
                _ => return false,
            }
        }
        if ends.len() != 2 {
            return false;
        }

        let mut visited = HashSet::with_capacity(self.vertex_count());
        let mut current = ends[0];
        visited.insert(current);
        while visited.len() < self.vertex_count() {
            match self.neighbors(current).find(|neighbor| !visited.contains(neighbor)) {
                // stuck before covering the graph, e.g. a path plus a disjoint cycle
                None => return false,
                Some(next) => {
                    visited.insert(next);
                    current = next;
                }
            }
        }

        true
    }

    /// Whether this graph is a single cycle: at least three vertices, as many edges as vertices, connected, and
    /// every vertex of degree 2.
    pub fn is_cycle(&self) -> bool {
        if self.vertex_count() < 3 || self.edge_count() != self.vertex_count() || !self.is_connected() {
            return false;
        }

        self.indices().all(|index| self.degree(index) == 2)
    }

    /// Whether this graph contains a cycle, found by peeling leaves until none are left.
    ///
    /// Graphs with fewer than three vertices have no cycle.
    pub fn has_cycle(&self) -> bool {
        if self.vertex_count() < 3 {
            return false;
        }

        !self.peel_leaves().is_empty()
    }

    /// A copy of this graph from which vertices of degree at most 1 are removed, repeatedly, until none remain.
    ///
    /// An acyclic graph peels down to nothing; otherwise what is left is made of cycles and the paths between them.
    pub fn peel_leaves(&self) -> Graph {
        let mut peeled = self.clone();

        loop {
            let leaves = peeled.indices()
                .filter(|index| peeled.degree(*index) <= 1)
                .collect_vec();
            if leaves.is_empty() {
                return peeled;
            }

            for leaf in leaves {
                peeled.remove_vertex(leaf);
            }
        }
    }

    /// Whether this graph is connected and has no cycle; the empty graph qualifies.
    ///
    /// Despite the name this recognizes trees only: a disconnected graph is never a forest here, even when every
    /// component is a tree.
    pub fn is_forest(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        self.is_connected() && !self.has_cycle()
    }

    /// Whether some edge is a bridge, i.e. removing it disconnects its connected class.
    ///
    /// Each edge is tried in turn on a copy of its class, so `self` is never modified.
    pub fn has_bridge(&self) -> bool {
        for class in self.connected_classes() {
            let mut component = self.induced(class);
            let edges = component.adjacency.all_edges()
                .map(|(u, v, _)| (u, v))
                .collect_vec();

            for (u, v) in edges {
                component.remove_edge(u, v);
                let disconnected = !component.is_connected();
                component.add_edge(u, v);

                if disconnected {
                    tracing::trace!(u, v, "found bridge");
                    return true;
                }
            }
        }

        false
    }
}
