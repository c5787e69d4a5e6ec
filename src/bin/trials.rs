//! Trial driver: repeated matches with one search-driven seat.
//!
//! Plays N matches against a configurable opponent lineup and reports how
//! often the search seat ended on the winning side.

use anyhow::{bail, Result};
use clap::Parser;

use resistance_mcts::core::Seat;
use resistance_mcts::game::Match;
use resistance_mcts::mcts::SearchConfig;
use resistance_mcts::policy::{Policy, RandomPolicy, SearchPolicy, SuspicionPolicy};

#[derive(Parser)]
#[command(name = "trials")]
#[command(version, about = "Win-rate trials for the search-driven agent")]
struct Cli {
    /// Seats at the table (5-10)
    #[arg(long, short = 'p', default_value_t = 5)]
    players: usize,

    /// Matches to play
    #[arg(long, short = 't', default_value_t = 100)]
    trials: usize,

    /// Search iterations per decision
    #[arg(long, short = 'i', default_value_t = 10)]
    iterations: u32,

    /// Opponent lineup: `random` or `suspicion`
    #[arg(long, short = 'o', default_value = "random")]
    opponents: String,

    /// Random seed for the whole run
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let hero = Seat::new((cli.players - 1) as u8);
    let mut seats: Vec<Box<dyn Policy>> = Vec::with_capacity(cli.players);
    for i in 0..cli.players - 1 {
        let seat_seed = cli.seed.wrapping_add(1 + i as u64);
        match cli.opponents.as_str() {
            "random" => seats.push(Box::new(RandomPolicy::new(seat_seed))),
            "suspicion" => seats.push(Box::new(SuspicionPolicy::new(seat_seed))),
            other => bail!("unknown opponent lineup '{other}' (expected 'random' or 'suspicion')"),
        }
    }
    let config = SearchConfig::default()
        .with_iterations(cli.iterations)
        .with_seed(cli.seed);
    seats.push(Box::new(SearchPolicy::new(config)));

    let mut table = Match::new(seats, cli.seed)?;

    println!(
        "{} players, {} trials, {} opponents, {} iterations/decision, seed {}",
        cli.players, cli.trials, cli.opponents, cli.iterations, cli.seed
    );

    let mut won = 0usize;
    let mut played_as_spy = 0usize;
    for _ in 0..cli.trials {
        let outcome = table.play()?;
        let hero_is_spy = outcome.spies.contains(&hero);
        if hero_is_spy {
            played_as_spy += 1;
        }
        if hero_is_spy == outcome.spies_win {
            won += 1;
        }
    }

    println!(
        "won {}/{} ({:.1}%), seated as spy in {} matches",
        won,
        cli.trials,
        won as f64 * 100.0 / cli.trials as f64,
        played_as_spy
    );

    Ok(())
}
