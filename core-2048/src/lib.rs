//! Value types shared by the 2048 rules engine.
//!
//! The board is a set of [`Tile`]s on a `GRID_SIZE` x `GRID_SIZE` grid. Coordinates are
//! `(x, y)` with `x` growing to the right and `y` growing downwards, so `(0, 0)` is the top-left
//! cell.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

pub mod metrics;

mod direction;

pub use direction::Direction;

pub const GRID_SIZE: usize = 4;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value of every freshly dealt or spawned tile.
pub const SPAWN_VALUE: u32 = 2;

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(1);

/// Encodes a coordinate as a single scalar, `y * GRID_SIZE + x`.
pub const fn checksum(x: usize, y: usize) -> usize {
    y * GRID_SIZE + x
}

/// Stable identity of a tile. Never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u64);

impl TileId {
    pub fn fresh() -> Self {
        Self(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    #[default]
    Idle,
    /// Spawned during the last turn.
    Born,
    /// Produced by a merge during the last turn.
    Merged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub x: usize,
    pub y: usize,
    pub value: u32,
    pub state: TileState,
}

impl Tile {
    pub const fn checksum(&self) -> usize {
        checksum(self.x, self.y)
    }

    pub const fn with_position(self, x: usize, y: usize) -> Self {
        Self { x, y, ..self }
    }

    pub const fn with_state(self, state: TileState) -> Self {
        Self { state, ..self }
    }
}

/// A tile that may not have been given an identity yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialTile {
    pub id: Option<TileId>,
    pub x: usize,
    pub y: usize,
    pub value: u32,
    pub state: TileState,
}

impl PartialTile {
    pub const fn new(x: usize, y: usize, value: u32, state: TileState) -> Self {
        Self {
            id: None,
            x,
            y,
            value,
            state,
        }
    }
}

impl From<Tile> for PartialTile {
    fn from(tile: Tile) -> Self {
        Self {
            id: Some(tile.id),
            x: tile.x,
            y: tile.y,
            value: tile.value,
            state: tile.state,
        }
    }
}

/// Coordinates of the cells in one line of travel, leading edge first.
///
/// For `Left`/`Right` the line is row `line`, for `Up`/`Down` it is column `line`.
pub fn line_coordinates(
    direction: Direction,
    line: usize,
) -> impl Iterator<Item = (usize, usize)> {
    debug_assert!(line < GRID_SIZE);

    (0..GRID_SIZE).map(move |i| {
        let far = GRID_SIZE - 1 - i;

        match direction {
            Direction::Up => (line, i),
            Direction::Down => (line, far),
            Direction::Right => (far, line),
            Direction::Left => (i, line),
        }
    })
}
