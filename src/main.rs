//! Go-Engine command line.
//!
//! ## Usage
//!
//! - `go-engine` - Show a demo
//! - `go-engine gtp` - Start GTP server for GUI integration
//! - `go-engine demo --seed 7` - Play a random game and print it
//! - `go-engine show "<record>"` - Print a stored position

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use go_engine::{Board, Move};
use go_engine::constants::{DEFAULT_BOARD_SIZE, max_game_len};
use go_engine::gtp::GtpEngine;
use go_engine::playout::play_random_game;

/// Go-Engine: a Go position and rules engine
#[derive(Parser)]
#[command(name = "go-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp {
        /// Initial board size
        #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
    /// Play a random game and print the final position
    Demo {
        /// Board size
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
        /// Move limit (defaults to three times the board area)
        #[arg(short, long)]
        moves: Option<usize>,
    },
    /// Print a position given as a text record
    Show {
        /// Record such as "5 5/2B2/1BWB1/5/5 B 0 0"
        record: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout stays a clean GTP channel.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let board = Board::new(size).context("invalid board size")?;
            info!(size, "starting GTP server");
            let mut engine = GtpEngine::with_board(board, Rng::new())?;
            engine.run()
        }
        Some(Commands::Demo { size, seed, moves }) => run_demo(size, seed, moves),
        Some(Commands::Show { record }) => {
            let board = Board::from_fen(&record.join(" ")).context("invalid position record")?;
            print!("{board}");
            Ok(())
        }
        None => run_demo(9, None, None),
    }
}

fn run_demo(size: usize, seed: Option<u64>, moves: Option<usize>) -> Result<()> {
    println!("Go-Engine: random game demo\n");

    let mut board = Board::new(size).context("invalid board size")?;
    let mut rng = seed.map_or_else(Rng::new, Rng::with_seed);
    let limit = moves.unwrap_or_else(|| max_game_len(size));

    let played = play_random_game(&mut board, &mut rng, limit);
    let record: Vec<String> = played.iter().filter_map(Move::to_sgf).collect();

    println!("Moves played: {}", played.len());
    println!(";{}\n", record.join(";"));
    println!("{board}");
    println!(
        "Captures: black {} white {}",
        board.black_captures(),
        board.white_captures()
    );
    println!("Record: {}", board.to_fen());
    Ok(())
}
