use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;
use std::io::BufRead;
use std::time::Instant;

use turncube::prelude::*;

/// Turn, scramble and unscramble a 3x3x3 cube from the terminal.
#[derive(Parser)]
#[command(name = "turncube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every committed move.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for reproducible scrambles.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply moves such as "X1 Y0' Z-1" to a solved cube and print the net.
    Show {
        #[arg(default_value = "")]
        moves: String,
    },
    /// Scramble a solved cube and print the scramble.
    Scramble { moves: usize },
    /// Scramble, then replay the scramble backwards one move at a time.
    Solve {
        moves: usize,
        #[arg(long, default_value_t = DEFAULT_SOLVE_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },
    /// Play easy, medium, hard, time-attack, daily or daily:N from stdin.
    Play { mode: GameMode },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).env().init()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Show { moves } => {
            let cube = CubeState::solved().apply_all(Move::parse_sequence(&moves)?);
            print!("{}", cube);
            println!("solved: {}", cube.is_solved());
        }
        Command::Scramble { moves } => {
            let mut session = Session::new();
            let scramble = session.scramble_with(moves, &mut rng)?;
            println!("{}", Move::format_sequence(&scramble));
            print!("{}", session.state());
        }
        Command::Solve { moves, delay_ms } => run_solve(moves, delay_ms, &mut rng)?,
        Command::Play { mode } => run_game(mode, &mut rng)?,
    }

    Ok(())
}

fn run_solve(moves: usize, delay_ms: u64, rng: &mut StdRng) -> anyhow::Result<()> {
    let mut session = Session::new();
    let scramble = session.scramble_with(moves, rng)?;
    println!("scramble: {}", Move::format_sequence(&scramble));
    print!("{}", session.state());

    let session = shared(session);
    let handle = spawn_solve(&session, Duration::from_millis(delay_ms))?;
    for (i, m) in handle.moves().enumerate() {
        println!("{:>3}/{} {}", i + 1, handle.total(), m);
    }
    handle.wait()?;

    let session = session
        .lock()
        .map_err(|_| anyhow::anyhow!("Solve worker panicked"))?;
    print!("{}", session.state());
    println!("solved: {}", session.is_solved());
    Ok(())
}

fn run_game(mode: GameMode, rng: &mut StdRng) -> anyhow::Result<()> {
    let mut game = Game::start_with(mode, rng, Instant::now())?;
    println!("{}: enter moves, or undo, redo, solve, quit", mode);
    print!("{}", game.session().state());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "undo" => {
                game.undo()?;
            }
            "redo" => {
                game.redo()?;
            }
            "solve" => {
                let replayed = game.solve()?;
                println!("replayed {}", Move::format_sequence(&replayed));
            }
            moves => match Move::parse_sequence(moves) {
                Ok(moves) => {
                    for m in moves {
                        game.apply_move(m)?;
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }

        print!("{}", game.session().state());
        println!("moves: {}", game.session().move_count());
        if game.status_at(Instant::now()) != GameStatus::InProgress {
            break;
        }
    }

    println!("{}", game.result());
    Ok(())
}
