use crate::{Tile, CELL_COUNT};

/// Score that must have been earned to build a tile of `value` out of 2s.
pub fn implied_score(value: u32) -> u32 {
    let exponent = value.checked_ilog2().unwrap_or(0);

    exponent.saturating_sub(1) * value
}

pub fn tile_sum(tiles: &[Tile]) -> u32 {
    tiles.iter().map(|tile| tile.value).sum()
}

pub fn highest_value(tiles: &[Tile]) -> u32 {
    tiles.iter().map(|tile| tile.value).max().unwrap_or(0)
}

pub fn empty_count(tiles: &[Tile]) -> usize {
    CELL_COUNT.saturating_sub(tiles.len())
}

/// Lower bound of the score implied by every tile on the board.
pub fn board_implied_score(tiles: &[Tile]) -> u32 {
    tiles.iter().map(|tile| implied_score(tile.value)).sum()
}
