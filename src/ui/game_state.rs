//! Game state management for the Tic-Tac-Toe GUI
//!
//! One `GameState` owns one board for the duration of one game and
//! sequences the turns between the human (X) and the engine (O). The
//! whole game tree fits in a fraction of a frame, so the engine runs
//! synchronously inside the update loop.

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::engine::{AiEngine, MoveResult};
use crate::eval::evaluate;
use crate::rules::{outcome, winning_line, Outcome};

/// The human always plays X, the engine O
pub const HUMAN_MARK: Mark = Mark::X;
pub const AI_MARK: Mark = Mark::O;

/// Turn phase of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHuman,
    AwaitingAi,
    GameOver(Outcome),
}

/// Reasons a human move is rejected. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("that cell is already taken")]
    Occupied,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 3]>,
    pub last_ai_result: Option<MoveResult>,
    pub message: Option<String>,
    engine: AiEngine,
}

impl GameState {
    /// Start a fresh game with a randomly drawn starting player
    #[must_use]
    pub fn new() -> Self {
        let starter = if rand::rng().random_bool(0.5) {
            HUMAN_MARK
        } else {
            AI_MARK
        };
        Self::with_starting_player(starter)
    }

    /// Start a fresh game with a fixed starting player
    #[must_use]
    pub fn with_starting_player(starter: Mark) -> Self {
        info!(?starter, "new game");
        let phase = if starter == HUMAN_MARK {
            Phase::AwaitingHuman
        } else {
            Phase::AwaitingAi
        };
        Self {
            board: Board::new(starter),
            phase,
            last_move: None,
            winning_line: None,
            last_ai_result: None,
            message: None,
            engine: AiEngine::new(),
        }
    }

    /// Throw the game away and start another
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        self.phase == Phase::AwaitingHuman
    }

    /// Handle a click on `pos`. A rejection leaves the board untouched
    /// and is surfaced to the player as a notice.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), MoveError> {
        match self.phase {
            Phase::GameOver(_) => return Err(MoveError::GameOver),
            Phase::AwaitingAi => return Err(MoveError::NotYourTurn),
            Phase::AwaitingHuman => {}
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        self.board.apply_move(pos);
        self.last_move = Some(pos);
        self.message = None;
        debug!(cell = pos.to_index(), "human move");
        self.after_move();
        Ok(())
    }

    /// Let the engine take its turn. Does nothing unless it is O's move.
    pub fn step_ai(&mut self) {
        if self.phase != Phase::AwaitingAi {
            return;
        }

        let result = self.engine.select_move(&mut self.board);
        self.last_ai_result = Some(result);

        match result.best_move {
            Some(pos) => {
                self.board.apply_move(pos);
                self.last_move = Some(pos);
                self.after_move();
            }
            None => {
                // Outcome detection after every move keeps full boards
                // out of this phase, so a missing move is a bug upstream.
                self.message = Some("engine found no move".to_string());
                self.phase = Phase::GameOver(outcome(&self.board));
            }
        }
    }

    /// Outcome check after every move decides the next phase
    fn after_move(&mut self) {
        let result = outcome(&self.board);
        debug!(?result, eval = evaluate(&self.board), "position");
        match result {
            Outcome::InProgress => {
                self.phase = if self.board.to_move() == HUMAN_MARK {
                    Phase::AwaitingHuman
                } else {
                    Phase::AwaitingAi
                };
            }
            _ => {
                self.winning_line = winning_line(&self.board).map(|(_, line)| line);
                info!(?result, "game over");
                self.phase = Phase::GameOver(result);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
