use std::collections::BTreeSet;

use petgraph::visit::Dfs;

use crate::graph::Graph;
use crate::vertex::VertexIndex;

/// Index of the vertex whose class decides [`Graph::is_connected`] when present.
const REFERENCE_VERTEX: VertexIndex = 0;

impl Graph {
    /// The connected class of `v`: every vertex reachable from `v`, `v` included.
    ///
    /// Empty if `v` is not a vertex of this graph.
    pub fn connected_class(&self, v: VertexIndex) -> BTreeSet<VertexIndex> {
        if !self.contains(v) {
            return BTreeSet::new();
        }

        let mut class = BTreeSet::new();
        let mut dfs = Dfs::new(&self.adjacency, v);
        while let Some(reached) = dfs.next(&self.adjacency) {
            class.insert(reached);
        }

        class
    }

    /// Partition the vertices into connected classes, ordered by their lowest index.
    pub fn connected_classes(&self) -> Vec<BTreeSet<VertexIndex>> {
        let mut remaining: BTreeSet<VertexIndex> = self.indices().collect();
        let mut classes = Vec::new();

        while let Some(&seed) = remaining.first() {
            let class = self.connected_class(seed);
            remaining.retain(|index| !class.contains(index));
            classes.push(class);
        }

        classes
    }

    /// Whether `s` and `t` are both vertices of this graph and lie in the same connected class.
    pub fn are_connected(&self, s: VertexIndex, t: VertexIndex) -> bool {
        self.contains(t) && self.connected_class(s).contains(&t)
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// The empty graph is connected. Board graphs normally carry a vertex 0; when it is missing, the lowest
    /// index stands in for it.
    pub fn is_connected(&self) -> bool {
        let reference = if self.contains(REFERENCE_VERTEX) {
            REFERENCE_VERTEX
        } else {
            match self.indices().next() {
                None => return true,
                Some(lowest) => lowest,
            }
        };

        self.connected_class(reference).len() == self.vertex_count()
    }
}
