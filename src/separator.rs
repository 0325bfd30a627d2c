use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::vertex::VertexIndex;

impl Graph {
    /// A small set of vertices whose removal should separate `s` from `t`.
    ///
    /// Decided by the first matching case, working on the connected class `C` of `s`:
    /// 1. `s` and `t` in different classes (or missing): nothing.
    /// 2. `C` is a cycle or a chain: the lowest-indexed vertex of the whole graph.
    /// 3. `t` has a single neighbor: that neighbor. Likewise for `s`.
    /// 4. `C` is complete: every vertex of `C`. Only when `s == t` is that vertex left out.
    /// 5. Leaves are peeled off a copy of `C`, one at a time; the first removal after which `s` and `t` are no longer
    ///    connected is returned alone. Removing a leaf never disconnects two other vertices, so this only fires when
    ///    the peeled leaf is `s` or `t` itself.
    /// 6. Otherwise: all neighbors of `s`.
    ///
    /// This approximates a minimum vertex cut without guaranteeing one.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn critical_set(&self, s: VertexIndex, t: VertexIndex) -> BTreeSet<VertexIndex> {
        let class = self.connected_class(s);
        if !class.contains(&t) {
            return BTreeSet::new();
        }

        let component = self.induced(class.iter().copied());
        if component.is_cycle() || component.is_chain() {
            return self.indices().take(1).collect();
        }

        if self.degree(t) == 1 {
            return self.neighbors(t).collect();
        }
        if self.degree(s) == 1 {
            return self.neighbors(s).collect();
        }

        if component.is_complete() {
            return component.indices()
                .filter(|index| *index != s || *index != t)
                .collect();
        }

        if let Some(cut) = component.peel_until_separated(s, t) {
            tracing::debug!(cut, "peeling separated the endpoints");
            return BTreeSet::from([cut]);
        }

        self.neighbors(s).collect()
    }

    /// Peel leaves off a copy, in ascending index order and repeatedly, until removing one leaves `s` and `t`
    /// disconnected; returns that leaf.
    fn peel_until_separated(&self, s: VertexIndex, t: VertexIndex) -> Option<VertexIndex> {
        let mut peeled = self.clone();

        loop {
            let mut removed_any = false;
            for index in self.indices() {
                if !peeled.contains(index) || peeled.degree(index) > 1 {
                    continue;
                }

                peeled.remove_vertex(index);
                removed_any = true;
                if !peeled.are_connected(s, t) {
                    return Some(index);
                }
            }

            if !removed_any {
                return None;
            }
        }
    }
}
