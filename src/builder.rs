//! Construction of board graphs from the tiles of a game.

use std::collections::BTreeSet;

use crate::error::BuilderInvalidReason;
use crate::graph::Graph;
use crate::vertex::{PlayerID, Points, Vertex, VertexConfig, Weight};

/// A tile as the game layer sees it.
///
/// Tiles are identified by their position in the board's tile ordering, which becomes the vertex index.
pub trait Tile {
    /// Whether this is a water tile; water tiles never become vertices.
    fn is_water(&self) -> bool;
    /// Positions of the tiles adjacent to this one.
    fn neighbors(&self) -> Vec<usize>;
    /// The cost of building on this tile.
    fn cost(&self) -> Weight;
    /// The victory points this tile is worth.
    fn victory_points(&self) -> Points;
    /// Whether `player` occupies this tile.
    fn is_occupied_by(&self, player: PlayerID) -> bool;
}

/// A plain [`Tile`], for callers without tile objects of their own.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TileRecord {
    /// See [`Tile::is_water`].
    pub water: bool,
    /// See [`Tile::neighbors`].
    pub neighbors: Vec<usize>,
    /// See [`Tile::cost`].
    pub cost: Weight,
    /// See [`Tile::victory_points`].
    pub victory_points: Points,
    /// Players occupying the tile.
    pub occupants: BTreeSet<PlayerID>,
}

impl TileRecord {
    /// A land tile with the given cost and victory points, no neighbors and no occupants.
    pub fn land(cost: Weight, victory_points: Points) -> Self {
        Self {
            cost,
            victory_points,
            ..Default::default()
        }
    }

    /// A water tile with no neighbors.
    pub fn water() -> Self {
        Self {
            water: true,
            ..Default::default()
        }
    }

    /// Set the neighbor positions of this tile.
    pub fn with_neighbors(mut self, neighbors: impl IntoIterator<Item = usize>) -> Self {
        self.neighbors = neighbors.into_iter().collect();
        self
    }

    /// Mark `player` as occupying this tile.
    pub fn occupied_by(mut self, player: PlayerID) -> Self {
        self.occupants.insert(player);
        self
    }
}

impl Tile for TileRecord {
    fn is_water(&self) -> bool {
        self.water
    }

    fn neighbors(&self) -> Vec<usize> {
        self.neighbors.clone()
    }

    fn cost(&self) -> Weight {
        self.cost
    }

    fn victory_points(&self) -> Points {
        self.victory_points
    }

    fn is_occupied_by(&self, player: PlayerID) -> bool {
        self.occupants.contains(&player)
    }
}

/// Builds the [`Graph`] of a board from its tiles.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further call does nothing.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    size: usize,
    players: usize,
    tiles: Vec<TileRecord>,
    player_filter: Option<PlayerID>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl BoardBuilder {
    /// Construct a new builder for a board of `size` tiles and a game with `players` players, with no tiles added yet.
    ///
    /// Positions below `size` which never receive a tile stay empty in the graph, like water.
    pub fn with_size(size: usize, players: usize) -> Self {
        Self {
            size,
            players,
            tiles: Vec::with_capacity(size),
            ..Default::default()
        }
    }

    /// Append a tile at the next position.
    ///
    /// Occupancy is read for players `0..players`; other players are ignored.
    /// May cause the builder to enter a [`TileOutOfBounds`](BuilderInvalidReason::TileOutOfBounds) invalid state if
    /// the board is already full, or a [`NeighborOutOfBounds`](BuilderInvalidReason::NeighborOutOfBounds) one if the
    /// tile lists a neighbor position not below the board size.
    pub fn add_tile(&mut self, tile: &impl Tile) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let position = self.tiles.len();
        if position >= self.size {
            self.invalid_reasons.push(BuilderInvalidReason::TileOutOfBounds { tile: position, tiles: self.size });
            return self;
        }

        let (size, neighbors) = (self.size, tile.neighbors());
        self.invalid_reasons.extend(neighbors.iter()
            .filter(|neighbor| **neighbor >= size)
            .map(|neighbor| BuilderInvalidReason::NeighborOutOfBounds { tile: position, neighbor: *neighbor, tiles: size }));
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.tiles.push(TileRecord {
            water: tile.is_water(),
            neighbors,
            cost: tile.cost(),
            victory_points: tile.victory_points(),
            occupants: (0..self.players).filter(|player| tile.is_occupied_by(*player)).collect(),
        });

        self
    }

    /// Shorthand for multiple calls to [`Self::add_tile`], in order.
    pub fn add_tiles<'a, T: Tile + 'a>(&mut self, tiles: impl IntoIterator<Item = &'a T>) -> &mut Self {
        for tile in tiles {
            self.add_tile(tile);
        }

        self
    }

    /// Keep only the tiles occupied by `player`, and the edges between them.
    ///
    /// May cause the builder to enter a [`PlayerOutOfRange`](BuilderInvalidReason::PlayerOutOfRange) invalid state if
    /// `player` is not below the player count.
    pub fn only_player(&mut self, player: PlayerID) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if player >= self.players {
            self.invalid_reasons.push(BuilderInvalidReason::PlayerOutOfRange { player, players: self.players });
            return self;
        }

        self.player_filter = Some(player);
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Graph`].
    ///
    /// Every kept land tile becomes a vertex whose index is its position; two kept tiles are connected when either lists
    /// the other as a neighbor. If the builder is invalid, a reference to a [`Vec`] of [`BuilderInvalidReason`] will
    /// indicate why.
    pub fn build(&self) -> Result<Graph, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let kept = |record: &TileRecord| {
            !record.water && self.player_filter.map_or(true, |player| record.occupants.contains(&player))
        };

        let mut graph = Graph::new();
        for (position, record) in self.tiles.iter().enumerate().filter(|(_, record)| kept(record)) {
            graph.insert_vertex(Vertex::new(VertexConfig {
                index: position,
                extra_cost: record.cost,
                victory_points: record.victory_points,
                owners: record.occupants.clone(),
            }));
        }

        // add_edge ignores positions which did not become vertices
        for (position, record) in self.tiles.iter().enumerate().filter(|(_, record)| kept(record)) {
            for neighbor in &record.neighbors {
                graph.add_edge(position, *neighbor);
            }
        }

        tracing::debug!(
            size = self.size,
            tiles = self.tiles.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            player = ?self.player_filter,
            "built board graph"
        );

        Ok(graph)
    }
}
