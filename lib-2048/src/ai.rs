use crate::{
    logic::{self, MoveOutcome},
    Direction, Tile,
};

pub mod monte_carlo;
pub mod random;

pub trait Ai {
    /// Picks a direction that changes the board, or `None` if there is none.
    fn get_next_move(&mut self, tiles: &[Tile]) -> Option<Direction>;
}

fn get_all_moves(tiles: &[Tile]) -> impl Iterator<Item = (MoveOutcome, Direction)> + '_ {
    Direction::iter().filter_map(move |direction| {
        logic::try_move(tiles, direction).map(|outcome| (outcome, direction))
    })
}
