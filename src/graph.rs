use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::vertex::{Vertex, VertexIndex};

/// A simple, undirected, vertex-weighted graph.
///
/// Vertices are keyed by their index. Edges are not objects of their own: they exist only as
/// symmetric adjacency between two vertices, which every mutation here keeps symmetric.
///
/// Equality of two graphs compares their vertex index sets and nothing else, so two graphs on
/// the same indices are equal even when their edges differ.
/// Use [`Graph::same_structure`] to compare edges as well.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    pub(crate) vertices: BTreeMap<VertexIndex, Vertex>,
    pub(crate) adjacency: UnGraphMap<VertexIndex, ()>,
}

impl Graph {
    /// The empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph on vertices `0..n`, all with zero cost, and no edges.
    pub fn with_vertices(n: usize) -> Self {
        let mut graph = Self {
            vertices: BTreeMap::new(),
            adjacency: UnGraphMap::with_capacity(n, 0),
        };
        (0..n).for_each(|index| {
            graph.add_vertex(index);
        });

        graph
    }

    /// The subgraph induced by `keep`, leaving `self` untouched.
    ///
    /// Indices in `keep` which are not vertices of `self` are ignored.
    pub fn induced(&self, keep: impl IntoIterator<Item = VertexIndex>) -> Self {
        let keep: HashSet<VertexIndex> = keep.into_iter().collect();

        let mut induced = self.clone();
        for index in self.indices().filter(|index| !keep.contains(index)) {
            induced.remove_vertex(index);
        }

        induced
    }

    /// A copy of this graph in which the vertices in `members` are replaced by a single vertex.
    ///
    /// The new vertex takes the lowest index among `members`, the sum of their costs and victory points and the
    /// union of their owners. It is connected only to those outside vertices which were adjacent to *every* member;
    /// a vertex adjacent to just some of the members loses those edges.
    ///
    /// Indices in `members` which are not vertices of `self` are ignored; if none remain, this is a plain copy.
    pub fn merge(&self, members: impl IntoIterator<Item = VertexIndex>) -> Self {
        let members: BTreeSet<VertexIndex> = members.into_iter()
            .filter(|index| self.contains(*index))
            .collect();

        let Some(merged) = Vertex::fold(members.iter().filter_map(|index| self.vertex(*index))) else {
            return self.clone();
        };

        let rewired = self.indices()
            .filter(|index| !members.contains(index))
            .filter(|index| members.iter().all(|member| self.is_neighbor(*index, *member)))
            .collect_vec();

        tracing::debug!(?members, merged = merged.index(), ?rewired, "merging vertices");

        let mut result = self.clone();
        for member in &members {
            result.remove_vertex(*member);
        }

        let merged_index = merged.index();
        result.insert_vertex(merged);
        for index in rewired {
            result.add_edge(index, merged_index);
        }

        result
    }

    /// Add a fresh vertex with cost 0 at `index`, unless a vertex with this index already exists.
    ///
    /// Returns whether the vertex was added.
    pub fn add_vertex(&mut self, index: VertexIndex) -> bool {
        self.insert_vertex(Vertex::with_index(index))
    }

    /// Add `vertex`, unless a vertex with the same index already exists.
    ///
    /// Returns whether the vertex was added.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> bool {
        if self.contains(vertex.index()) {
            return false;
        }

        self.adjacency.add_node(vertex.index());
        self.vertices.insert(vertex.index(), vertex);
        true
    }

    /// Connect `u` and `v`.
    ///
    /// Does nothing if `u == v`, if either is not a vertex of this graph or if they are already connected.
    /// Returns whether a new edge was added.
    pub fn add_edge(&mut self, u: VertexIndex, v: VertexIndex) -> bool {
        if u == v || !self.contains(u) || !self.contains(v) {
            return false;
        }

        self.adjacency.add_edge(u, v, ()).is_none()
    }

    /// Disconnect `u` and `v`, in both directions.
    ///
    /// Returns whether there was an edge to remove.
    pub fn remove_edge(&mut self, u: VertexIndex, v: VertexIndex) -> bool {
        self.adjacency.remove_edge(u, v).is_some()
    }

    /// Remove vertex `v` and every edge touching it, returning the removed vertex.
    pub fn remove_vertex(&mut self, v: VertexIndex) -> Option<Vertex> {
        self.adjacency.remove_node(v);
        self.vertices.remove(&v)
    }

    /// The vertex with index `index`, if any.
    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(&index)
    }

    /// Whether a vertex with index `index` belongs to this graph.
    pub fn contains(&self, index: VertexIndex) -> bool {
        self.vertices.contains_key(&index)
    }

    /// All vertices, in ascending index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All vertex indices, in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.keys().copied()
    }

    /// The order of the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether this graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Every edge as an unordered pair of vertex indices.
    pub fn edges(&self) -> HashSet<UnorderedPair<VertexIndex>> {
        self.adjacency.all_edges()
            .map(|(u, v, _)| UnorderedPair::from((u, v)))
            .collect()
    }

    /// Neighbors of `v` in ascending index order; nothing if `v` is not a vertex of this graph.
    pub fn neighbors(&self, v: VertexIndex) -> impl Iterator<Item = VertexIndex> {
        self.adjacency.neighbors(v).sorted()
    }

    /// Whether `u` and `v` share an edge.
    pub fn is_neighbor(&self, u: VertexIndex, v: VertexIndex) -> bool {
        self.adjacency.contains_edge(u, v)
    }

    /// The degree of `v`, 0 if `v` is not a vertex of this graph.
    pub fn degree(&self, v: VertexIndex) -> usize {
        self.adjacency.neighbors(v).count()
    }

    /// The highest degree in the graph, 0 for the empty graph.
    pub fn max_degree(&self) -> usize {
        self.indices().map(|index| self.degree(index)).max().unwrap_or(0)
    }

    /// The lowest degree in the graph, 0 for the empty graph.
    pub fn min_degree(&self) -> usize {
        self.indices().map(|index| self.degree(index)).min().unwrap_or(0)
    }

    /// The adjacency matrix, where row and column `p` stand for the vertex of rank `p` in ascending index order.
    pub fn adjacency_matrix(&self) -> Array2<u8> {
        let positions: HashMap<VertexIndex, usize> = self.indices()
            .enumerate()
            .map(|(position, index)| (index, position))
            .collect();

        let mut matrix = Array2::zeros((self.vertex_count(), self.vertex_count()));
        for (u, v, _) in self.adjacency.all_edges() {
            if let (Some(pu), Some(pv)) = (positions.get(&u), positions.get(&v)) {
                matrix[[*pu, *pv]] = 1;
                matrix[[*pv, *pu]] = 1;
            }
        }

        matrix
    }

    /// Compare vertex indices *and* edges, unlike `==`.
    pub fn same_structure(&self, other: &Self) -> bool {
        self == other && self.edges() == other.edges()
    }

    /// Whether some simple graph has exactly the degrees in `sequence`, by Havel–Hakimi reduction.
    ///
    /// The order of `sequence` does not matter.
    pub fn is_graphic_sequence(sequence: &[usize]) -> bool {
        let mut remaining = sequence.to_vec();

        loop {
            remaining.retain(|degree| *degree > 0);
            remaining.sort_unstable_by(|a, b| b.cmp(a));

            let Some((&first, rest)) = remaining.split_first() else {
                return true;
            };
            if first > rest.len() {
                return false;
            }

            let mut next = rest.to_vec();
            // every entry is positive here
            next.iter_mut().take(first).for_each(|degree| *degree -= 1);
            remaining = next;
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.keys().eq(other.vertices.keys())
    }
}

impl Eq for Graph {}

impl Display for Graph {
    /// One `u,v;` line per edge, lower index first, sorted.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (u, v) in self.adjacency.all_edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .sorted() {
            writeln!(f, "{},{};", u, v)?;
        }

        Ok(())
    }
}
