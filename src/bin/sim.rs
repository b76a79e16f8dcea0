use fleet_hunt::{AutoPlayer, BoardSize, Game, GameStatus, Player};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one automated game and print a JSON summary.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <size>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size = BoardSize::new(args[2].parse()?)?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = AutoPlayer::new(SmallRng::seed_from_u64(seed.wrapping_add(1)), size);
    let mut game = Game::new(&mut rng, size);

    while game.status() == GameStatus::InProgress {
        let raw = player.prompt_guess(game.board())?;
        game.submit(&raw)?;
    }

    let stats = game.stats();
    let result = json!({
        "size": size,
        "fleet": game.fleet().ships(),
        "correct": stats.correct,
        "incorrect": stats.incorrect,
        "guesses": game.history().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
