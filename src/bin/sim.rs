use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{GameRunner, GameState, RandomPlayer};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut runner = GameRunner::new(Box::new(RandomPlayer::new()), GameState::new());
    let outcome = runner.run(&mut rng, true)?;
    let state = runner.into_state();

    let result = json!({
        "seed": seed,
        "outcome": outcome,
        "winner": outcome.winner().map(|p| p.name()),
        "moves": state.move_history(),
        "board": state.board(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
