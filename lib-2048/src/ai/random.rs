use rand::{seq::SliceRandom, Rng};

use crate::{Direction, Tile};

use super::Ai;

pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: Rng,
{
    fn get_next_move(&mut self, tiles: &[Tile]) -> Option<Direction> {
        let moves: Vec<_> = super::get_all_moves(tiles)
            .map(|(_, direction)| direction)
            .collect();

        moves.choose(&mut self.rng).copied()
    }
}

impl<R> RandomAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
