//! Turn orchestration on top of the rules engine.
//!
//! A turn slides and merges the board, spawns a tile only when the board changed, then probes
//! for the terminal state. The best score lives behind [`ScoreStore`] and is threaded through
//! each turn explicitly.

use log::{debug, trace};
use rand::Rng;

use crate::{factory, logic, Direction, Tile};

/// Where the best score across games is kept.
pub trait ScoreStore {
    fn get(&self) -> u32;

    fn save(&mut self, score: u32);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    pub const fn new(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) {
        self.best = score;
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn get(&self) -> u32 {
        (**self).get()
    }

    fn save(&mut self, score: u32) {
        (**self).save(score);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Over,
}

/// What a single call to [`Game::play`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub changed: bool,
    pub gained_score: u32,
    pub status: GameStatus,
}

pub struct Game<R, S> {
    rng: R,
    store: S,
    tiles: Vec<Tile>,
    score: u32,
    gained_score: u32,
    status: GameStatus,
}

impl<R, S> Game<R, S>
where
    R: Rng,
    S: ScoreStore,
{
    pub fn new(mut rng: R, store: S) -> Self {
        let tiles = factory::create_initial_tiles(&mut rng).to_vec();

        Self {
            rng,
            store,
            tiles,
            score: 0,
            gained_score: 0,
            status: GameStatus::Playing,
        }
    }

    /// Starts a game from an existing board, e.g. a restored or hand-built one.
    pub fn from_tiles(rng: R, store: S, tiles: Vec<Tile>, score: u32) -> Self {
        let status = Self::status_of(&tiles);

        Self {
            rng,
            store,
            tiles,
            score,
            gained_score: 0,
            status,
        }
    }

    pub fn reset(&mut self) {
        debug!("new game, previous score {}", self.score);

        self.tiles = factory::create_initial_tiles(&mut self.rng).to_vec();
        self.score = 0;
        self.gained_score = 0;
        self.status = GameStatus::Playing;
    }

    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.status == GameStatus::Over {
            return TurnOutcome {
                changed: false,
                gained_score: 0,
                status: self.status,
            };
        }

        let outcome = logic::move_and_resolve(&self.tiles, direction);
        trace!(
            "{direction:?}: changed {}, gained {}",
            outcome.changed,
            outcome.gained_score
        );

        self.tiles = if outcome.changed {
            let tiles = factory::spawn_tile(&mut self.rng, outcome.tiles);
            self.status = Self::status_of(&tiles);

            if self.status == GameStatus::Over {
                debug!("no moves left, final score {}", self.score + outcome.gained_score);
            }

            tiles
        } else {
            outcome.tiles
        };

        self.gained_score = outcome.gained_score;
        self.score += outcome.gained_score;

        if self.score > self.store.get() {
            self.store.save(self.score);
        }

        TurnOutcome {
            changed: outcome.changed,
            gained_score: outcome.gained_score,
            status: self.status,
        }
    }

    fn status_of(tiles: &[Tile]) -> GameStatus {
        if logic::is_empty_cells_exist(tiles) || logic::check_available_moves(tiles) {
            GameStatus::Playing
        } else {
            GameStatus::Over
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score gained by the last turn.
    pub fn gained_score(&self) -> u32 {
        self.gained_score
    }

    pub fn best_score(&self) -> u32 {
        self.store.get()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }
}
