//! Rules engine for a sliding-tile merge puzzle.
//!
//! A turn flows `logic::move_tiles` -> `merge::resolve_merges_and_score` -> (if the board
//! changed) `factory::spawn_tile` -> `logic::check_available_moves`. `logic::move_and_resolve`
//! bundles the first two steps and [`game::Game`] drives the whole turn.

pub use core_2048::*;

pub mod ai;
pub mod control_flow_helper;
pub mod factory;
pub mod game;
pub mod logic;
pub mod matrix;
pub mod merge;
