use std::ops::ControlFlow;

use rand::Rng;

use crate::{control_flow_helper, factory, logic, Direction, Tile};

use super::Ai;

/// Scores each direction by the total score of random playouts that start with it.
pub struct MonteCarloAi<R> {
    rng: R,
    iterations: u32,
}

impl<R> Ai for MonteCarloAi<R>
where
    R: Rng,
{
    fn get_next_move(&mut self, tiles: &[Tile]) -> Option<Direction> {
        let player_moves = super::get_all_moves(tiles);

        player_moves
            .max_by_key(|(outcome, _)| {
                Self::eval_monte_carlo(
                    &mut self.rng,
                    self.iterations,
                    &outcome.tiles,
                    outcome.gained_score,
                )
            })
            .map(|(_, direction)| direction)
    }
}

impl<R> MonteCarloAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R, iterations: u32) -> Self {
        Self { rng, iterations }
    }

    fn eval_monte_carlo(rng: &mut R, iterations: u32, tiles: &[Tile], gained_score: u32) -> u64 {
        (0..iterations)
            .map(|_| -> u64 {
                let final_score = control_flow_helper::loop_try_fold(
                    (tiles.to_vec(), gained_score),
                    |(tiles, score)| {
                        let tiles = factory::spawn_tile(rng, tiles);

                        let mut new_boards: Vec<_> =
                            logic::try_all_moves(&tiles).into_iter().flatten().collect();

                        if new_boards.is_empty() {
                            ControlFlow::Break(score)
                        } else {
                            let i = rng.gen_range(0..new_boards.len());
                            let outcome = new_boards.swap_remove(i);

                            ControlFlow::Continue((outcome.tiles, score + outcome.gained_score))
                        }
                    },
                );

                final_score.into()
            })
            .sum()
    }
}
