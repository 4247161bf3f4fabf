use std::iter::Peekable;

use log::trace;

use crate::{line_coordinates, matrix, Direction, Tile, TileState, GRID_SIZE};

/// Merges equal neighbours along every line of travel and re-compacts the lines.
///
/// The tile nearer the leading edge survives a merge and keeps its id; the other one is dropped.
/// A tile produced by a merge is tagged [`TileState::Merged`] and does not merge again during the
/// same move. Returns the tiles and the sum of all merged values.
pub fn resolve_merges_and_score(slid_tiles: Vec<Tile>, direction: Direction) -> (Vec<Tile>, u32) {
    let grid = &matrix::build_grid(&slid_tiles);

    (0..GRID_SIZE).fold(
        (Vec::with_capacity(slid_tiles.len()), 0),
        |(mut resolved, score), line| {
            let line_tiles = line_coordinates(direction, line).filter_map(|(x, y)| grid[y][x]);
            let (merged, line_score) = merge_line(line_tiles.peekable());

            resolved.extend(
                merged
                    .into_iter()
                    .zip(line_coordinates(direction, line))
                    .map(|(tile, (x, y))| tile.with_position(x, y)),
            );

            (resolved, score + line_score)
        },
    )
}

fn merge_line(mut tiles: Peekable<impl Iterator<Item = Tile>>) -> (Vec<Tile>, u32) {
    let mut merged = Vec::with_capacity(GRID_SIZE);
    let mut score = 0;

    while let Some(tile) = tiles.next() {
        match tiles.next_if(|next| next.value == tile.value) {
            Some(consumed) => {
                let value = tile.value * 2;
                trace!("tile {} absorbed tile {} -> {value}", tile.id.0, consumed.id.0);

                score += value;
                merged.push(Tile {
                    value,
                    state: TileState::Merged,
                    ..tile
                });
            }
            None => merged.push(tile),
        }
    }

    (merged, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileId;

    fn row(values: [u32; GRID_SIZE]) -> Vec<Tile> {
        values
            .into_iter()
            .enumerate()
            .filter(|&(_, value)| value != 0)
            .map(|(x, value)| Tile {
                id: TileId(x as u64 + 1),
                x,
                y: 0,
                value,
                state: TileState::Idle,
            })
            .collect()
    }

    fn row_values(tiles: &[Tile]) -> [u32; GRID_SIZE] {
        let mut values = [0; GRID_SIZE];
        for tile in tiles.iter().filter(|tile| tile.y == 0) {
            values[tile.x] = tile.value;
        }
        values
    }

    #[test]
    fn pair_merges_into_leading_tile() {
        let (tiles, score) = resolve_merges_and_score(row([2, 2, 0, 0]), Direction::Left);

        assert_eq!(row_values(&tiles), [4, 0, 0, 0]);
        assert_eq!(score, 4);
        assert_eq!(tiles[0].id, TileId(1));
        assert_eq!(tiles[0].state, TileState::Merged);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let (tiles, score) = resolve_merges_and_score(row([2, 2, 2, 0]), Direction::Left);

        assert_eq!(row_values(&tiles), [4, 2, 0, 0]);
        assert_eq!(score, 4);

        let (tiles, score) = resolve_merges_and_score(row([4, 2, 2, 0]), Direction::Left);

        assert_eq!(row_values(&tiles), [4, 4, 0, 0]);
        assert_eq!(score, 4);
    }

    #[test]
    fn two_pairs_merge_independently() {
        let (tiles, score) = resolve_merges_and_score(row([2, 2, 4, 4]), Direction::Left);

        assert_eq!(row_values(&tiles), [4, 8, 0, 0]);
        assert_eq!(score, 12);
    }

    #[test]
    fn merges_follow_travel_order() {
        let (tiles, score) = resolve_merges_and_score(row([0, 2, 2, 2]), Direction::Right);

        assert_eq!(row_values(&tiles), [0, 0, 2, 4]);
        assert_eq!(score, 4);
        // The rightmost tile leads when moving right.
        let survivor = tiles.iter().find(|tile| tile.value == 4).unwrap();
        assert_eq!(survivor.id, TileId(4));
    }

    #[test]
    fn unmergeable_line_is_untouched() {
        let input = row([2, 4, 8, 16]);

        let (tiles, score) = resolve_merges_and_score(input.clone(), Direction::Left);

        assert_eq!(tiles, input);
        assert_eq!(score, 0);
    }
}
