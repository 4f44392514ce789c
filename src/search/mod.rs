//! Search module for the Tic-Tac-Toe AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over the full game tree
//! - A recency-capped move picker layered on top of minimax

pub mod minimax;
pub mod selector;

pub use minimax::{minimax, SearchResult, LOSS_SCORE, WIN_SCORE};
pub use selector::{Candidate, MoveSelector};
