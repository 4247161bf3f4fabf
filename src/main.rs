use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use lib_2048::{
    ai::{monte_carlo::MonteCarloAi, random::RandomAi, Ai},
    game::{Game, MemoryScoreStore, ScoreStore},
    metrics,
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Random,
    MonteCarlo,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Play headless 2048 games to the end")]
struct Cli {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    games: u32,

    /// Seed for tile spawns and move choices (fresh entropy if omitted)
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Move policy
    #[arg(long, short = 'p', value_enum, default_value_t = Mode::Random)]
    player: Mode,

    /// Playouts per candidate move for the Monte Carlo player
    #[arg(long, short = 'i', default_value_t = 20)]
    iterations: u32,

    /// Print one JSON object per game instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    game: u32,
    turns: u32,
    score: u32,
    highest_tile: u32,
    empty_cells: usize,
    implied_score: u32,
    best_score: u32,
}

fn play_game<R, S>(game: &mut Game<R, S>, ai: &mut impl Ai) -> u32
where
    R: Rng,
    S: ScoreStore,
{
    let mut turns = 0;

    while let Some(direction) = ai.get_next_move(game.tiles()) {
        if game.play(direction).changed {
            turns += 1;
        }

        if game.is_over() {
            break;
        }
    }

    turns
}

fn run(
    out: &mut impl Write,
    cli: &Cli,
    mut game: Game<ChaCha8Rng, &mut MemoryScoreStore>,
    ai: &mut impl Ai,
) -> Result<()> {
    for index in 1..=cli.games {
        if index > 1 {
            game.reset();
        }

        let turns = play_game(&mut game, ai);

        let summary = GameSummary {
            game: index,
            turns,
            score: game.score(),
            highest_tile: metrics::highest_value(game.tiles()),
            empty_cells: metrics::empty_count(game.tiles()),
            implied_score: metrics::board_implied_score(game.tiles()),
            best_score: game.best_score(),
        };
        info!(
            "game {} finished after {} turns with score {}",
            summary.game, summary.turns, summary.score
        );

        let written = if cli.json {
            let line = serde_json::to_string(&summary).context("serialising game summary")?;
            writeln!(out, "{line}")
        } else {
            writeln!(
                out,
                "Game {}: {} turns, score {}, highest tile {}",
                summary.game, summary.turns, summary.score, summary.highest_tile
            )
        };
        written.context("writing game summary")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let ai_rng = ChaCha8Rng::from_rng(&mut rng).context("seeding move policy")?;

    info!("playing {} game(s) with {:?} player", cli.games, cli.player);

    let mut store = MemoryScoreStore::default();
    let game = Game::new(rng, &mut store);
    let mut stdout = io::stdout().lock();

    match cli.player {
        Mode::Random => run(&mut stdout, &cli, game, &mut RandomAi::new(ai_rng)),
        Mode::MonteCarlo => run(
            &mut stdout,
            &cli,
            game,
            &mut MonteCarloAi::new(ai_rng, cli.iterations),
        ),
    }?;

    if !cli.json {
        writeln!(stdout, "Best score: {}", store.get()).context("writing best score")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("merge-2048").chain(args.iter().copied()))
    }

    #[test]
    fn random_game_runs_to_the_end() {
        let mut store = MemoryScoreStore::default();
        let mut game = Game::new(ChaCha8Rng::seed_from_u64(1), &mut store);
        let mut ai = RandomAi::new(ChaCha8Rng::seed_from_u64(2));

        let turns = play_game(&mut game, &mut ai);

        assert!(game.is_over());
        assert!(turns > 0);
        assert_eq!(game.best_score(), game.score());
    }

    #[test]
    fn json_output_has_one_line_per_game() {
        let cli = cli(&["--games", "3", "--json"]);
        let mut store = MemoryScoreStore::default();
        let game = Game::new(ChaCha8Rng::seed_from_u64(5), &mut store);
        let mut out = Vec::new();

        run(&mut out, &cli, game, &mut RandomAi::new(ChaCha8Rng::seed_from_u64(6))).unwrap();

        let out = String::from_utf8(out).unwrap();
        let summaries: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[2]["game"], 3);
        for summary in &summaries {
            let score = summary["score"].as_u64().unwrap();

            assert!(summary["best_score"].as_u64().unwrap() >= score);
            assert_eq!(summary["empty_cells"], 0);
            // Spawned 4s are never dealt, so every merge is accounted for on the board.
            assert_eq!(summary["implied_score"].as_u64().unwrap(), score);
        }
    }

    #[test]
    fn parses_monte_carlo_player() {
        let cli = cli(&["-p", "monte-carlo", "-i", "5", "-s", "9"]);

        assert!(matches!(cli.player, Mode::MonteCarlo));
        assert_eq!(cli.iterations, 5);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.games, 1);
    }
}
