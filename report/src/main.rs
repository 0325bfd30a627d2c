use std::error::Error;

use tilegraph::{BoardBuilder, Graph, SearchConfig, TileRecord};
use tracing_subscriber::EnvFilter;

/// A small island: two rows of land around a lake, tiles numbered left to right.
///
/// ```text
///  0 - 1 - 2 - 3
///  |   |   ~   |
///  4 - 5 - 6 - 7 - 8
/// ```
fn island() -> Vec<TileRecord> {
    vec![
        TileRecord::land(1, 0).with_neighbors([1, 4]).occupied_by(0),
        TileRecord::land(2, 1).with_neighbors([0, 2, 5]).occupied_by(0),
        TileRecord::land(1, 0).with_neighbors([1, 3, 6]),
        TileRecord::land(3, 2).with_neighbors([2, 7]).occupied_by(1),
        TileRecord::land(1, 0).with_neighbors([0, 5]),
        TileRecord::land(2, 1).with_neighbors([1, 4, 6]).occupied_by(0),
        TileRecord::water().with_neighbors([2, 5, 7]),
        TileRecord::land(1, 0).with_neighbors([3, 6, 8]).occupied_by(1),
        TileRecord::land(4, 3).with_neighbors([7]).occupied_by(1),
    ]
}

fn describe(name: &str, board: &Graph, config: &SearchConfig) {
    println!("== {} ({} vertices, {} edges)", name, board.vertex_count(), board.edge_count());
    print!("{}", board);

    let structures = board.structures().iter().map(ToString::to_string).collect::<Vec<_>>();
    println!("structures: {}", structures.join(", "));
    println!("classes: {:?}", board.connected_classes());
    println!("greedy coloring: {:?}", board.greedy_coloring());
    println!("planar coloring: {:?}", board.planar_coloring());
    println!("triangle: {}", board.has_complete_subgraph(3));

    let square = BoardBuilder::with_size(4, 0)
        .add_tiles(&[
            TileRecord::land(0, 0).with_neighbors([1, 3]),
            TileRecord::land(0, 0).with_neighbors([0, 2]),
            TileRecord::land(0, 0).with_neighbors([1, 3]),
            TileRecord::land(0, 0).with_neighbors([2, 0]),
        ])
        .build()
        .map(|pattern| board.has_isomorphic_subgraph(&pattern, config))
        .unwrap_or(false);
    println!("square: {}", square);

    let mut indices = board.indices();
    if let (Some(first), Some(last)) = (indices.next(), indices.last()) {
        println!("distance {} -> {}: {}", first, last, board.distance(first, last));
        println!("critical set {} / {}: {:?}", first, last, board.critical_set(first, last));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SearchConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => SearchConfig::seeded(0),
    };
    tracing::info!(?config, "search configuration");

    let tiles = island();
    let board = BoardBuilder::with_size(tiles.len(), 2)
        .add_tiles(&tiles)
        .build()
        .map_err(|reasons| format!("invalid board: {:?}", reasons))?;
    describe("whole board", &board, &config);

    for player in 0..2 {
        let owned = BoardBuilder::with_size(tiles.len(), 2)
            .add_tiles(&tiles)
            .only_player(player)
            .build()
            .map_err(|reasons| format!("invalid board for player {}: {:?}", player, reasons))?;
        describe(&format!("player {}", player), &owned, &config);
    }

    Ok(())
}
