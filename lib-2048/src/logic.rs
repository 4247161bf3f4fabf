use rustc_hash::FxHashSet;

use crate::{line_coordinates, matrix, merge, Direction, Tile, TileState, CELL_COUNT, GRID_SIZE};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Right,
    Direction::Left,
];

/// Result of sliding and merging a board in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub tiles: Vec<Tile>,
    pub gained_score: u32,
    /// Whether the board differs from the one the move started from.
    pub changed: bool,
}

/// Slides every tile toward the leading edge of its line, closing gaps. Nothing is merged.
///
/// Carried tiles are reset to [`TileState::Idle`].
pub fn move_tiles(tiles: Vec<Tile>, direction: Direction) -> Vec<Tile> {
    let grid = &matrix::build_grid(&tiles);

    (0..GRID_SIZE)
        .flat_map(move |line| {
            line_coordinates(direction, line)
                .filter_map(move |(x, y)| grid[y][x])
                .zip(line_coordinates(direction, line))
                .map(|(tile, (x, y))| tile.with_position(x, y).with_state(TileState::Idle))
        })
        .collect()
}

pub fn is_empty_cells_exist(tiles: &[Tile]) -> bool {
    tiles.len() < CELL_COUNT
}

/// Whether any direction would change the board.
pub fn check_available_moves(tiles: &[Tile]) -> bool {
    Direction::iter().any(|direction| try_move(tiles, direction).is_some())
}

/// Compares two boards by `(x, y, value)`, ignoring ids and states.
pub fn matrix_are_same(a: &[Tile], b: &[Tile]) -> bool {
    fn footprint(tiles: &[Tile]) -> FxHashSet<(usize, usize, u32)> {
        tiles.iter().map(|tile| (tile.x, tile.y, tile.value)).collect()
    }

    a.len() == b.len() && footprint(a) == footprint(b)
}

pub fn move_and_resolve(tiles: &[Tile], direction: Direction) -> MoveOutcome {
    let slid = move_tiles(tiles.to_vec(), direction);
    let (resolved, gained_score) = merge::resolve_merges_and_score(slid, direction);
    let changed = !matrix_are_same(tiles, &resolved);

    MoveOutcome {
        tiles: resolved,
        gained_score,
        changed,
    }
}

pub fn try_move(tiles: &[Tile], direction: Direction) -> Option<MoveOutcome> {
    let outcome = move_and_resolve(tiles, direction);

    outcome.changed.then_some(outcome)
}

/// Every direction's outcome, indexed by `Direction as usize`. `None` marks a no-op.
pub fn try_all_moves(tiles: &[Tile]) -> [Option<MoveOutcome>; 4] {
    DIRECTIONS.map(|direction| try_move(tiles, direction))
}
