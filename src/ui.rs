#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the CLI adapter.

use crate::{
    board::Board,
    common::{Cell, Player},
    config::BOARD_SIZE,
    scoreboard::Scoreboard,
};
use std::string::String;

/// Format (row, col) as a board coordinate, e.g. `(4, 0)` -> `"A5"`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    std::format!("{}{}", col_ch, row + 1)
}

/// Parse a board coordinate like `E5` or `j10` into (row, col).
/// Returns `None` for anything off the 10×10 board.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
        return None;
    }
    Some((row - 1, col))
}

fn stone_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Stone(Player::One) => 'X',
        Cell::Stone(Player::Two) => 'O',
    }
}

/// Print the board with column letters and row numbers.
pub fn print_board(board: &Board) {
    print_board_highlight(board, &[]);
}

/// Print the board with the given cells (a winning line) marked `*`.
pub fn print_board_highlight(board: &Board, highlight: &[(usize, usize)]) {
    std::print!("   ");
    for c in 0..BOARD_SIZE as usize {
        let ch = (b'A' + c as u8) as char;
        std::print!(" {}", ch);
    }
    std::println!();
    for r in 0..BOARD_SIZE as usize {
        std::print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE as usize {
            let ch = if highlight.contains(&(r, c)) {
                '*'
            } else {
                stone_char(board.cell(r, c))
            };
            std::print!(" {}", ch);
        }
        std::println!();
    }
}

/// Print cumulative results as `wins/total` per player.
pub fn print_scoreboard(player1: &str, player2: &str, scoreboard: &Scoreboard) {
    std::println!(
        "{}: {}/{}   {}: {}/{}",
        player1,
        scoreboard.player1_wins,
        scoreboard.total_games,
        player2,
        scoreboard.player2_wins,
        scoreboard.total_games
    );
}
