use tictactoe::{
    coord_to_string, init_logging, CliPlayer, GameOutcome, GameRunner, GameState, RandomPlayer,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Let the computer make the first move")]
        computer_first: bool,
    },
    /// Watch a random user play against the computer.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Let the computer make the first move")]
        computer_first: bool,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            computer_first,
        } => {
            println!("You are X, the computer is O.");
            let mut rng = make_rng(seed);
            let mut runner = GameRunner::new(Box::new(CliPlayer::new()), GameState::new());
            let outcome = runner.run(&mut rng, !computer_first)?;
            match outcome {
                GameOutcome::UserWon => println!("\nVICTORY! You completed a line."),
                GameOutcome::ComputerWon => println!("\nDEFEAT. The computer completed a line."),
                GameOutcome::Draw => println!("\nDraw. The board is full."),
                GameOutcome::Continue => println!("\nGame abandoned."),
            }
        }
        Commands::Auto {
            seed,
            computer_first,
        } => {
            let mut rng = make_rng(seed);
            let mut runner = GameRunner::new(Box::new(RandomPlayer::new()), GameState::new());
            let outcome = runner.run(&mut rng, !computer_first)?;
            let state = runner.into_state();
            for (i, m) in state.move_history().iter().enumerate() {
                println!("{:2}. {:<8} {}", i + 1, m.actor.name(), coord_to_string(m.x, m.y));
            }
            println!("\n{}", state.board());
            println!("{}", outcome);
        }
    }
    Ok(())
}
