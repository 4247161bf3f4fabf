use crate::{Tile, GRID_SIZE};

/// Positional view of a tile set, indexed `grid[y][x]`. `None` marks an empty cell.
pub type Grid = [[Option<Tile>; GRID_SIZE]; GRID_SIZE];

pub const EMPTY_GRID: Grid = [[None; GRID_SIZE]; GRID_SIZE];

/// Places every tile at its coordinate. A later tile on an already occupied cell overwrites the
/// earlier one.
pub fn build_grid(tiles: &[Tile]) -> Grid {
    tiles.iter().fold(EMPTY_GRID, |mut grid, &tile| {
        debug_assert!(tile.x < GRID_SIZE && tile.y < GRID_SIZE);
        debug_assert!(
            grid[tile.y][tile.x].is_none(),
            "two tiles at ({}, {})",
            tile.x,
            tile.y
        );

        grid[tile.y][tile.x] = Some(tile);
        grid
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TileId, TileState};

    fn tile(id: u64, x: usize, y: usize, value: u32) -> Tile {
        Tile {
            id: TileId(id),
            x,
            y,
            value,
            state: TileState::Idle,
        }
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = build_grid(&[]);

        assert!(grid.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn tiles_land_at_their_coordinates() {
        let tiles = [tile(1, 3, 0, 2), tile(2, 0, 2, 4)];

        let grid = build_grid(&tiles);

        assert_eq!(grid[0][3], Some(tiles[0]));
        assert_eq!(grid[2][0], Some(tiles[1]));
        assert_eq!(grid.iter().flatten().filter(|cell| cell.is_some()).count(), 2);
    }
}
