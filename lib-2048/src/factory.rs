//! Tile construction: identities, the initial deal, and spawning into empty cells.

use std::ops::ControlFlow;

use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::{
    checksum, control_flow_helper, PartialTile, Tile, TileId, TileState, CELL_COUNT, GRID_SIZE,
    SPAWN_VALUE,
};

/// Fills in a missing identity, passing every other field through.
pub fn create_tile(partial: PartialTile) -> Tile {
    Tile {
        id: partial.id.unwrap_or_else(TileId::fresh),
        x: partial.x,
        y: partial.y,
        value: partial.value,
        state: partial.state,
    }
}

pub fn random_coordinate(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..GRID_SIZE)
}

/// Deals the two opening tiles.
///
/// A colliding second draw nudges the first tile one cell left (or to `x = 1` from the left
/// edge) instead of redrawing.
pub fn create_initial_tiles(rng: &mut impl Rng) -> [Tile; 2] {
    let mut first = create_tile(PartialTile::new(
        random_coordinate(rng),
        random_coordinate(rng),
        SPAWN_VALUE,
        TileState::Idle,
    ));
    let second = create_tile(PartialTile::new(
        random_coordinate(rng),
        random_coordinate(rng),
        SPAWN_VALUE,
        TileState::Idle,
    ));

    if first.x == second.x && first.y == second.y {
        first.x = if first.x == 0 { 1 } else { first.x - 1 };
    }

    [first, second]
}

pub fn collect_occupied(tiles: &[Tile]) -> FxHashSet<usize> {
    tiles.iter().map(Tile::checksum).collect()
}

/// Draws random coordinates until one falls outside `occupied`.
///
/// Never returns if every cell is occupied; callers check for a full board first.
pub fn pick_available_coordinate(
    rng: &mut impl Rng,
    occupied: &FxHashSet<usize>,
) -> (usize, usize) {
    debug_assert!(occupied.len() < CELL_COUNT, "no free cell to pick");

    control_flow_helper::loop_try_fold((), |()| {
        let x = random_coordinate(rng);
        let y = random_coordinate(rng);

        if occupied.contains(&checksum(x, y)) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break((x, y))
        }
    })
}

/// Adds a `Born` tile to a random empty cell. A full board is returned unchanged.
pub fn spawn_tile(rng: &mut impl Rng, mut tiles: Vec<Tile>) -> Vec<Tile> {
    let occupied = collect_occupied(&tiles);

    if occupied.len() == CELL_COUNT {
        debug!("board is full, nothing spawned");
        return tiles;
    }

    let (x, y) = pick_available_coordinate(rng, &occupied);
    let tile = create_tile(PartialTile::new(x, y, SPAWN_VALUE, TileState::Born));

    debug!("spawned tile {} at ({x}, {y})", tile.id.0);
    tiles.push(tile);

    tiles
}
