//! AI engine wrapping the move picker
//!
//! The engine owns a [`MoveSelector`] for the lifetime of one game and
//! adds timing and node statistics to each pick. The search itself is
//! exhaustive minimax, so there is no depth or time configuration; the
//! only knob is the recency-list capacity inherited from the picker.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiEngine, Board, Mark, Pos};
//!
//! let mut board = Board::new(Mark::X);
//! board.apply_move(Pos::new(0, 0)); // X takes a corner
//!
//! let mut engine = AiEngine::new();
//! let result = engine.select_move(&mut board);
//! if let Some(pos) = result.best_move {
//!     board.apply_move(pos);
//! }
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::search::MoveSelector;

/// Recency-list capacity used by [`AiEngine::new`]
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Result of a move search with statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the position after the move, from O's perspective
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI opponent for a single game
#[derive(Debug, Clone)]
pub struct AiEngine {
    selector: MoveSelector,
}

impl AiEngine {
    /// Create an engine with the default recency-list capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an engine with a custom recency-list capacity
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            selector: MoveSelector::new(limit),
        }
    }

    /// Pick a move for the side to move and report search statistics.
    ///
    /// `best_move` is `None` only on a board with no legal moves, which
    /// callers rule out by checking the outcome after every move.
    pub fn select_move(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let candidate = self.selector.select(board);
        let time_ms = start.elapsed().as_millis() as u64;

        let result = match candidate {
            Some(c) => MoveResult {
                best_move: Some(c.pos),
                score: c.score,
                nodes: c.nodes,
                time_ms,
            },
            None => MoveResult {
                best_move: None,
                score: 0,
                nodes: 0,
                time_ms,
            },
        };

        debug!(
            best_move = ?result.best_move.map(Pos::to_index),
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );
        result
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new()
    }
}
