//! Cube4: a 4x4x4 gravity connect-four engine.
//!
//! ## Usage
//!
//! - `cube4` - Play one demo game and show the final board
//! - `cube4 serve` - Start the text protocol server on stdin/stdout
//! - `cube4 move <BOARD>` - Print the chosen column for one board
//! - `cube4 selfplay` - Play a batch of engine games and report results

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use cube4::board::Board;
use cube4::game::{Outcome, play_game};
use cube4::policy::{Engine, FirstOpen, get_move};
use cube4::protocol::Session;

/// Cube4: a 4x4x4 gravity connect-four engine
#[derive(Parser)]
#[command(name = "cube4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the tie-break RNG (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use by a host process
    Serve,
    /// Choose a move for a board given as 64 cells in z, y, x order
    Move {
        /// Cells as 0/1/2 (or ./X/O); whitespace is ignored
        board: String,
    },
    /// Play engine games against itself or the first-open baseline
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        /// Let player two use the first-open baseline
        #[arg(long)]
        baseline: bool,
    },
    /// Play a single game and print the board
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let engine = match cli.seed {
        Some(seed) => Engine::with_seed(seed),
        None => Engine::new(),
    };

    match cli.command {
        Some(Commands::Serve) => Session::new(engine).run().context("protocol session failed"),
        Some(Commands::Move { board }) => run_move(engine, &board),
        Some(Commands::Selfplay { games, baseline }) => {
            run_selfplay(engine, games, baseline);
            Ok(())
        }
        Some(Commands::Demo) | None => {
            run_demo(engine);
            Ok(())
        }
    }
}

fn run_move(mut engine: Engine, text: &str) -> Result<()> {
    let board: Board = text.parse().context("could not read board")?;
    let (x, y) = get_move(&board.to_grid(), &mut engine)?;
    println!("{x} {y}");
    Ok(())
}

fn run_selfplay(mut engine: Engine, games: usize, baseline: bool) {
    let mut wins = [0usize; 2];
    let mut draws = 0;
    let mut total_moves = 0;

    for _ in 0..games {
        let mut board = Board::new();
        let outcome = if baseline {
            play_game(&mut engine, &mut FirstOpen, &mut board)
        } else {
            let mut rival = engine.fork();
            play_game(&mut engine, &mut rival, &mut board)
        };
        match outcome {
            Outcome::Won(player, moves) => {
                wins[(player.code() - 1) as usize] += 1;
                total_moves += moves;
            }
            Outcome::Draw => draws += 1,
        }
    }

    let opponent = if baseline { "first-open" } else { "engine" };
    println!("{games} games, engine vs {opponent}");
    println!("player one wins: {}", wins[0]);
    println!("player two wins: {}", wins[1]);
    println!("draws: {draws}");
    let decided = wins[0] + wins[1];
    if decided > 0 {
        println!("average game length: {:.1}", total_moves as f64 / decided as f64);
    }
}

fn run_demo(mut engine: Engine) {
    println!("Cube4: 4x4x4 gravity connect-four\n");

    let mut rival = FirstOpen;
    let mut board = Board::new();
    match play_game(&mut engine, &mut rival, &mut board) {
        Outcome::Won(player, moves) => println!("Player {player} wins after {moves} moves\n"),
        Outcome::Draw => println!("Draw\n"),
    }
    println!("{board}");
}
