//! Game rules for Tic-Tac-Toe
//!
//! Terminal-state detection over the eight winning lines:
//! three rows, three columns, two diagonals.

use crate::board::{Board, Mark, Pos};

/// The eight winning lines as cell-index triples (row-major indexing)
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // diagonals
    [2, 4, 6],
];

/// State of a game as seen from the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// Mark holding a completed line, if any
#[must_use]
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Completed line and its owner, if any.
///
/// The cell triple is returned so the UI can highlight the win.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, [Pos; 3])> {
    for line in LINES {
        let mark = board.get(Pos::from_index(line[0]));
        if mark != Mark::Empty
            && board.get(Pos::from_index(line[1])) == mark
            && board.get(Pos::from_index(line[2])) == mark
        {
            return Some((mark, line.map(Pos::from_index)));
        }
    }
    None
}

/// Terminal-state check: a completed line wins, a full board without
/// one is a draw, anything else is still in progress.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
