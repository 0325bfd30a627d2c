#![warn(missing_docs)]

//! # `tilegraph`
//!
//! Graph analysis for tile-based game boards.
//! A board is a simple undirected graph: one [`Vertex`] per land tile, carrying the cost of building there, its victory
//! points and the players occupying it, and an edge between every two adjacent land tiles.
//! Build one from tiles with a [`BoardBuilder`], or by hand through the mutation methods on [`Graph`].
//!
//! Boards have tens of vertices, not millions, and the algorithms here are written for that scale:
//! clarity over asymptotics, and copies of the graph wherever a query needs to explore destructively.
//!
//! # Queries
//! - connectivity: [`Graph::connected_class`], [`Graph::connected_classes`], [`Graph::is_connected`];
//! - structure: completeness, chains, cycles, trees and bridges, summarized by [`Graph::structures`];
//! - path cost: [`Graph::distance`], weighted by vertex cost rather than by edges;
//! - coloring: [`Graph::greedy_coloring`] and [`Graph::planar_coloring`];
//! - substructures: [`Graph::has_complete_subgraph`] and [`Graph::has_isomorphic_subgraph`];
//! - separation: [`Graph::critical_set`].
//!
//! Clique detection, subgraph matching, planar coloring and critical sets are heuristics with known blind spots, each
//! documented on its method.

pub use builder::{BoardBuilder, Tile, TileRecord};
pub use coloring::{Color, Coloring};
pub use config::SearchConfig;
pub use distance::UNREACHABLE;
pub use error::{BuilderInvalidReason, ConfigError};
pub use graph::Graph;
pub use structure::Structure;
pub use vertex::{PlayerID, Points, Vertex, VertexConfig, VertexIndex, Weight};

pub mod builder;
pub(crate) mod coloring;
pub(crate) mod config;
pub(crate) mod connectivity;
pub(crate) mod distance;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod separator;
pub(crate) mod structure;
pub(crate) mod subgraph;
pub(crate) mod vertex;
