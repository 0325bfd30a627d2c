use thiserror::Error;

use crate::vertex::PlayerID;

/// Reasons a [`BoardBuilder`](crate::BoardBuilder) may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile was added to a board which already holds as many tiles as its size.
    #[error("tile {tile} does not fit on a board of {tiles} tiles")]
    TileOutOfBounds {
        /// Position the tile would have taken.
        tile: usize,
        /// Size of the board.
        tiles: usize,
    },
    /// A tile lists a neighbor position not below the board size.
    #[error("tile {tile} lists neighbor {neighbor}, but the board only has {tiles} tiles")]
    NeighborOutOfBounds {
        /// Position of the offending tile.
        tile: usize,
        /// The neighbor position it lists.
        neighbor: usize,
        /// Size of the board.
        tiles: usize,
    },
    /// The player filter is not below the player count.
    #[error("player {player} does not exist on a board for {players} players")]
    PlayerOutOfRange {
        /// The offending player id.
        player: PlayerID,
        /// Number of players on the board.
        players: usize,
    },
}

/// Errors reading a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the expected keys.
    #[error("invalid search configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// `max_attempts` is 0, so no search could ever succeed.
    #[error("max_attempts must be at least 1")]
    NoAttempts,
}
