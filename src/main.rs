#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleet_hunt::{
    init_logging, print_board, run, AutoPlayer, Board, BoardSize, CliPlayer, GameStats, Guess,
    GuessError, GuessResult, Player,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Find every hidden ship on a small grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_size, help = "Board size (4-10); skips the size menu")]
        size: Option<BoardSize>,
    },
    /// Watch the computer find every ship by itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_size, default_value = "6")]
        size: BoardSize,
    },
}

#[cfg(feature = "std")]
fn parse_size(s: &str) -> Result<BoardSize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    BoardSize::new(n).map_err(|e| e.to_string())
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Shows an [`AutoPlayer`]'s game on stdout as it happens.
#[cfg(feature = "std")]
struct Spectator<R: rand::Rng> {
    inner: AutoPlayer<R>,
    cli: CliPlayer<std::io::Empty, std::io::Stdout>,
}

#[cfg(feature = "std")]
impl<R: rand::Rng> Player for Spectator<R> {
    fn choose_board_size(&mut self) -> anyhow::Result<BoardSize> {
        self.inner.choose_board_size()
    }

    fn prompt_guess(&mut self, board: &Board) -> anyhow::Result<String> {
        print_board(&mut std::io::stdout(), board)?;
        let raw = self.inner.prompt_guess(board)?;
        println!("Guess: {}", raw);
        Ok(raw)
    }

    fn handle_rejected_guess(&mut self, raw: &str, error: &GuessError) {
        self.cli.handle_rejected_guess(raw, error);
    }

    fn handle_guess_result(&mut self, guess: Guess, result: GuessResult) {
        self.cli.handle_guess_result(guess, result);
    }

    fn handle_game_over(&mut self, board: &Board, stats: GameStats) {
        self.cli.handle_game_over(board, stats);
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            let mut rng = make_rng(seed);
            let mut player = CliPlayer::stdio();
            if let Some(size) = size {
                player = player.with_size(size);
            }
            run(&mut player, &mut rng)?;
        }
        Commands::Auto { seed, size } => {
            let mut rng = make_rng(seed);
            let guesser = SmallRng::from_rng(&mut rng);
            let mut player = Spectator {
                inner: AutoPlayer::new(guesser, size),
                cli: CliPlayer::new(std::io::empty(), std::io::stdout()),
            };
            run(&mut player, &mut rng)?;
        }
    }
    Ok(())
}
