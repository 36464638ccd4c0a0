#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{GameError, GameOutcome},
    config::BOARD_SIZE,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human user playing through a line-oriented terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    /// Build a player over arbitrary input and output streams.
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Format a coordinate as column letter plus one-based row, e.g. `(2, 1)` -> `B3`.
/// Columns past `Z` fall back to the one-based `row col` pair, e.g. `1 200`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    match u8::try_from(y).ok().filter(|&c| c < 26) {
        Some(c) => std::format!("{}{}", (b'A' + c) as char, x.saturating_add(1)),
        None => std::format!("{} {}", x.saturating_add(1), y.saturating_add(1)),
    }
}

/// Parse `B3` (column letter, row number) or `3 2` (row, column), both
/// one-based, into zero-based `(row, col)`. Range is not checked here.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut parts = input.split_whitespace();
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row: usize = a.parse().ok()?;
        let col: usize = b.parse().ok()?;
        if row == 0 || col == 0 {
            return None;
        }
        return Some((row - 1, col - 1));
    }

    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<(usize, usize)> {
        loop {
            let _ = write!(self.output, "\n{}", board);
            let last = (b'A' + BOARD_SIZE as u8 - 1) as char;
            let _ = write!(self.output, "Your move (A1-{}{}, q to quit): ", last, BOARD_SIZE);
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(line) {
                Some(coord) => return Some(coord),
                None => {
                    let _ = writeln!(self.output, "Invalid coordinate");
                }
            }
        }
    }

    fn handle_rejected_move(&mut self, coord: (usize, usize), err: &GameError) {
        let _ = writeln!(
            self.output,
            "Cannot play {}: {}",
            coord_to_string(coord.0, coord.1),
            err
        );
    }

    fn handle_computer_move(&mut self, coord: (usize, usize)) {
        let _ = writeln!(
            self.output,
            "Computer played {}",
            coord_to_string(coord.0, coord.1)
        );
    }

    fn handle_game_over(&mut self, board: &Board, outcome: GameOutcome) {
        let _ = writeln!(self.output, "\n{}", board);
        let _ = writeln!(self.output, "GAME OVER: {}", outcome);
    }
}
