//! Terminal front end for the Reversi engine
//!
//! Two ways in:
//! - `reversi play [--white] [--budget N]`: play against the engine,
//!   entering squares like `d3`
//! - `reversi demo [--budget N]`: watch the engine run a quick game
//!   against a naive opponent that always takes its first legal move

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use reversi::{AIEngine, EngineConfig, Player, Position, Square, SystemClock};

const DEMO_BUDGET: u32 = 10_000;

#[derive(Parser)]
#[command(name = "reversi", about = "Reversi against a budgeted game tree engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// Take the white discs; the engine then opens as Black
        #[arg(long)]
        white: bool,
        /// Expansion budget per engine decision
        #[arg(long, default_value_t = 1_000_000)]
        budget: u32,
    },
    /// Watch the engine play a quick game
    Demo {
        /// Expansion budget per engine decision
        #[arg(long, default_value_t = DEMO_BUDGET)]
        budget: u32,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Some(Commands::Play { white, budget }) => {
            let human = if white { Player::White } else { Player::Black };
            run_play(human, budget)
        }
        Some(Commands::Demo { budget }) => run_demo(budget),
        None => run_demo(DEMO_BUDGET),
    }
}

fn run_play(human: Player, budget: u32) -> anyhow::Result<()> {
    let clock = SystemClock;
    let engine = AIEngine::with_config(EngineConfig {
        expansion_budget: budget,
    });
    let mut position = Position::start(human, &clock);

    println!("You play {human}. Enter squares like d3.");

    let stdin = io::stdin();
    while !position.is_game_over() {
        print_state(&position, &clock);

        if position.current_player() == position.human_player() {
            let moves = position.legal_moves();
            let hints = moves
                .iter()
                .map(|square| square.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("your moves: {hints}");
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                println!();
                println!("input closed, abandoning the game");
                return Ok(());
            }
            let square: Square = match line.parse() {
                Ok(square) => square,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            if !moves.contains(&square) {
                println!("{square} does not capture anything");
                continue;
            }
            position.apply_move(square, &clock)?;
        } else {
            print!("thinking");
            io::stdout().flush()?;
            let result = engine.choose_move_with_progress(&position, || {
                print!(".");
                let _ = io::stdout().flush();
            })?;
            println!();
            println!(
                "engine plays {} (value {:+}, {} nodes, {} ms)",
                result.square, result.value, result.nodes, result.time_ms
            );
            position.apply_move(result.square, &clock)?;
        }
    }

    print_state(&position, &clock);
    announce_winner(&position);
    Ok(())
}

fn run_demo(budget: u32) -> anyhow::Result<()> {
    let clock = SystemClock;
    let engine = AIEngine::with_config(EngineConfig {
        expansion_budget: budget,
    });
    let mut position = Position::start(Player::White, &clock);

    while !position.is_game_over() {
        if position.current_player() == position.automated_player() {
            let result = engine.choose_move_with_stats(&position)?;
            println!(
                "{}: {} (value {:+}, {} nodes, {} ms)",
                position.current_player(),
                result.square,
                result.value,
                result.nodes,
                result.time_ms
            );
            position.apply_move(result.square, &clock)?;
        } else {
            let moves = position.legal_moves();
            let square = *moves.first().context("no reply available")?;
            println!("{}: {}", position.current_player(), square);
            position.apply_move(square, &clock)?;
        }
    }

    println!();
    println!("{}", position.board());
    println!(
        "final score: Black {} - White {}",
        position.score(Player::Black),
        position.score(Player::White)
    );
    announce_winner(&position);
    Ok(())
}

fn print_state(position: &Position, clock: &SystemClock) {
    println!();
    println!("{}", position.board());
    println!(
        "Black {:>2} [{}]   White {:>2} [{}]",
        position.score(Player::Black),
        fmt_duration(position.elapsed(Player::Black, clock)),
        position.score(Player::White),
        fmt_duration(position.elapsed(Player::White, clock)),
    );
    if position.is_game_over() {
        println!("game over");
    } else {
        println!("{} to move", position.current_player());
    }
}

fn announce_winner(position: &Position) {
    match position.winner() {
        Some(player) => println!("{player} wins"),
        None => println!("draw"),
    }
}

fn fmt_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
