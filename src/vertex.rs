use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Identity of a vertex; for board graphs, the position of the tile in the board's tile ordering.
pub type VertexIndex = usize;
/// Extra cost of entering a vertex, the unit of path weight.
pub type Weight = u32;
/// Victory points carried by a vertex.
pub type Points = u32;
/// Identity of a player occupying a tile.
pub type PlayerID = usize;

/// Everything needed to create a [`Vertex`].
///
/// Fields not given explicitly default to zero and to an empty owner set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexConfig {
    /// Identity of the new vertex.
    pub index: VertexIndex,
    /// Cost of entering the vertex.
    pub extra_cost: Weight,
    /// Victory points of the vertex.
    pub victory_points: Points,
    /// Players occupying the vertex.
    pub owners: BTreeSet<PlayerID>,
}

/// A vertex of a [`Graph`](crate::Graph).
///
/// Identity is the index alone: two vertices with the same index compare equal and hash alike
/// whatever their attributes.
///
/// A vertex does not carry its own neighbor set. Adjacency lives in the owning graph, which keeps it symmetric; ask
/// the graph through [`Graph::neighbors`](crate::Graph::neighbors) and [`Graph::degree`](crate::Graph::degree).
#[derive(Clone, Debug)]
pub struct Vertex {
    index: VertexIndex,
    extra_cost: Weight,
    victory_points: Points,
    owners: BTreeSet<PlayerID>,
}

impl Vertex {
    /// Create a vertex from a fully specified configuration record.
    pub fn new(config: VertexConfig) -> Self {
        Self {
            index: config.index,
            extra_cost: config.extra_cost,
            victory_points: config.victory_points,
            owners: config.owners,
        }
    }

    /// A vertex with no cost, no victory points and no owners.
    pub fn with_index(index: VertexIndex) -> Self {
        Self::new(VertexConfig { index, ..Default::default() })
    }

    /// The identity of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// The cost of entering this vertex.
    pub fn extra_cost(&self) -> Weight {
        self.extra_cost
    }

    /// The victory points of this vertex.
    pub fn victory_points(&self) -> Points {
        self.victory_points
    }

    /// The players occupying this vertex.
    pub fn owners(&self) -> &BTreeSet<PlayerID> {
        &self.owners
    }

    /// Fold several vertices into one: lowest index, summed cost and points, united owners.
    ///
    /// Returns `None` if `members` is empty.
    pub(crate) fn fold<'a>(members: impl IntoIterator<Item = &'a Vertex>) -> Option<Self> {
        members.into_iter().fold(None, |acc: Option<Vertex>, member| {
            Some(match acc {
                None => member.clone(),
                Some(mut merged) => {
                    merged.index = merged.index.min(member.index);
                    merged.extra_cost = merged.extra_cost.saturating_add(member.extra_cost);
                    merged.victory_points = merged.victory_points.saturating_add(member.victory_points);
                    merged.owners.extend(member.owners.iter().copied());
                    merged
                }
            })
        })
    }
}

impl From<VertexConfig> for Vertex {
    fn from(value: VertexConfig) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
