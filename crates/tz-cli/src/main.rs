//! CLI frontend for the Tenzies dice game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tenzies",
    about = "Tenzies: roll ten dice until they all match",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round in the terminal
    Play {
        /// RNG seed for reproducible rounds
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write log output to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Auto-play rounds with a greedy strategy and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// RNG seed for deterministic rounds
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Clock seconds that pass before each roll
        #[arg(long, default_value = "1")]
        seconds_per_roll: u32,

        /// Give up on a round after this many rolls
        #[arg(long, default_value = "1000")]
        max_rolls: u32,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the opening snapshot of a round as JSON
    State {
        /// RNG seed for the round
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, log_file } => commands::play::run(seed, log_file.as_deref()),
        Commands::Simulate {
            games,
            seed,
            seconds_per_roll,
            max_rolls,
            json,
        } => {
            commands::init_logging();
            commands::simulate::run(games, seed, seconds_per_roll, max_rolls, json)
        }
        Commands::State { seed } => {
            commands::init_logging();
            commands::state::run(seed)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
