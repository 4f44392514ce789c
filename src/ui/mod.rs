//! GUI components for the Tic-Tac-Toe game

pub mod app;
pub mod board_view;
pub mod game_state;
pub mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameState, MoveError, Phase};
