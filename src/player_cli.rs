#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use anyhow::{anyhow, Context};

use crate::{
    board::{Board, Marker},
    common::{GuessError, GuessResult},
    config::{BoardSize, BOARD_SIZE_OPTIONS},
    guess::{GameStats, Guess},
    player::Player,
};

pub const WIN_BANNER: &str = r"========
__   _______ _   _   _    _ _____ _   _
\ \ / /  _  | | | | | |  | |_   _| \ | |
 \ V /| | | | | | | | |  | | | | |  \| |
  \ / | | | | | | | | |/\| | | | | . ' |
  | | \ \_/ / |_| | \  /\  /_| |_| |\  |
  \_/  \___/ \___/   \/  \/ \___/\_| \_/
========";

/// Terminal front end: a numbered size menu, a `Guess: ` prompt and a table
/// of the board after every move.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    size: Option<BoardSize>,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player wired to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            size: None,
        }
    }

    /// Skip the menu and always play on `size`.
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if n == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Write for notification hooks, which cannot return an error.
    fn say(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{}", args) {
            log::warn!("failed to write to output: {}", e);
        }
    }
}

/// Cell text padded to two columns, the width of the emoji markers.
fn cell_text(marker: Marker) -> String {
    match marker {
        Marker::Unknown => std::format!("{} ", marker.symbol()),
        _ => marker.symbol().to_string(),
    }
}

/// Render `board` as a table: column digits across the top, row letters down the side.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    let n = board.size().get();
    write!(out, "   ")?;
    for c in 0..n {
        write!(out, " {:<2}", c)?;
    }
    writeln!(out)?;
    for (letter, row) in board.rows() {
        write!(out, " {} ", letter)?;
        for &marker in row {
            write!(out, " {}", cell_text(marker))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn choose_board_size(&mut self) -> anyhow::Result<BoardSize> {
        writeln!(self.output, "Welcome to Battleship 🚢")?;
        if let Some(size) = self.size {
            writeln!(self.output, "Board size: {}", size)?;
            return Ok(size);
        }
        for (i, (label, _)) in BOARD_SIZE_OPTIONS.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i + 1, label)?;
        }
        writeln!(self.output, "[0] CANCEL")?;
        loop {
            write!(self.output, "\nChoose board size [1...{} / 0]: ", BOARD_SIZE_OPTIONS.len())?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(0) => return Err(anyhow!("board size selection cancelled")),
                Ok(i) if i <= BOARD_SIZE_OPTIONS.len() => {
                    let (_, n) = BOARD_SIZE_OPTIONS[i - 1];
                    return Ok(BoardSize::new(n)?);
                }
                _ => writeln!(self.output, "Pick one of the listed numbers")?,
            }
        }
    }

    fn prompt_guess(&mut self, board: &Board) -> anyhow::Result<String> {
        print_board(&mut self.output, board)?;
        write!(self.output, "Guess: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn handle_rejected_guess(&mut self, _raw: &str, error: &GuessError) {
        if error.is_malformed() {
            self.say(format_args!("Choose a valid position (A1, B2, etc)"));
        } else {
            self.say(format_args!("{}", error));
        }
    }

    fn handle_guess_result(&mut self, guess: Guess, result: GuessResult) {
        match result {
            GuessResult::Hit(class) => {
                self.say(format_args!("{} -> hit {}", guess, class.symbol()))
            }
            GuessResult::Miss => self.say(format_args!("{} -> miss", guess)),
        }
    }

    fn handle_game_over(&mut self, board: &Board, stats: GameStats) {
        if let Err(e) = print_board(&mut self.output, board) {
            log::warn!("failed to write to output: {}", e);
        }
        self.say(format_args!("{}", WIN_BANNER));
        self.say(format_args!("{}", stats));
    }
}
