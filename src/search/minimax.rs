//! Minimax search with alpha-beta pruning
//!
//! The 3x3 game tree is small enough to search exhaustively, so there is
//! no depth limit, transposition table, or move ordering: legal moves are
//! visited in ascending cell-index order and the first strict improvement
//! wins ties.
//!
//! Scores are from O's perspective: O is the maximizing side, X the
//! minimizing side. Terminal scores are depth-adjusted so the search
//! prefers faster wins and slower losses.
//!
//! The board is mutated in place and restored through a strict
//! apply/recurse/undo nesting; a call leaves the board exactly as it
//! found it.

use crate::board::{Board, Mark, Pos};
use crate::rules::{outcome, Outcome};

/// Base score for an O win, reduced by the depth at which it occurs
pub const WIN_SCORE: i32 = 100;
/// Base score for an X win, increased by the depth at which it occurs
pub const LOSS_SCORE: i32 = -100;

/// Result of a minimax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from O's (the maximizing player's) perspective
    pub score: i32,
    /// Best move found; `None` at terminal nodes
    pub best_move: Option<Pos>,
    /// Total nodes visited, terminal nodes included
    pub nodes: u64,
}

/// Search the position to the end of the game.
///
/// `maximizing` names the side to move: `true` for O, `false` for X.
/// The initial call uses `depth = 0` and the full `(i32::MIN, i32::MAX)`
/// window.
#[must_use]
pub fn minimax(board: &mut Board, depth: i32, alpha: i32, beta: i32, maximizing: bool) -> SearchResult {
    let mut nodes = 0;
    let (score, best_move) = search(board, depth, alpha, beta, maximizing, &mut nodes);
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

fn search(
    board: &mut Board,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<Pos>) {
    *nodes += 1;

    match outcome(board) {
        Outcome::Win(mark) => {
            let score = if mark == Mark::O {
                WIN_SCORE - depth
            } else {
                LOSS_SCORE + depth
            };
            return (score, None);
        }
        Outcome::Draw => return (0, None),
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for mov in board.legal_moves() {
            board.apply_move(mov);
            let (score, _) = search(board, depth + 1, alpha, beta, false, nodes);
            board.undo_move(mov);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }

            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    } else {
        let mut best_score = i32::MAX;
        let mut best_move = None;

        for mov in board.legal_moves() {
            board.apply_move(mov);
            let (score, _) = search(board, depth + 1, alpha, beta, true, nodes);
            board.undo_move(mov);

            if score < best_score {
                best_score = score;
                best_move = Some(mov);
            }

            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(board: &mut Board, maximizing: bool) -> SearchResult {
        minimax(board, 0, i32::MIN, i32::MAX, maximizing)
    }

    /// Plain minimax without pruning, used as a reference implementation
    fn unpruned(board: &mut Board, depth: i32, maximizing: bool) -> (i32, Option<Pos>) {
        match outcome(board) {
            Outcome::Win(Mark::O) => return (WIN_SCORE - depth, None),
            Outcome::Win(_) => return (LOSS_SCORE + depth, None),
            Outcome::Draw => return (0, None),
            Outcome::InProgress => {}
        }

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;
        for mov in board.legal_moves() {
            board.apply_move(mov);
            let (score, _) = unpruned(board, depth + 1, !maximizing);
            board.undo_move(mov);
            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(mov);
            }
        }
        (best_score, best_move)
    }

    #[test]
    fn test_empty_board_is_a_draw_for_either_starter() {
        let mut board = Board::new(Mark::O);
        let result = run(&mut board, true);
        assert_eq!(result.score, 0, "perfect play from empty board draws");

        let mut board = Board::new(Mark::X);
        let result = run(&mut board, false);
        assert_eq!(result.score, 0, "perfect play from empty board draws");
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new(Mark::O);
        board.apply_move(Pos::from_index(4));
        board.apply_move(Pos::from_index(0));
        let snapshot = board.clone();

        let _ = run(&mut board, true);
        assert_eq!(board, snapshot, "search must leave the board untouched");
    }

    #[test]
    fn test_returned_move_is_legal() {
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[4] = Mark::O;
        cells[8] = Mark::X;
        let mut board = Board::from_cells(cells, Mark::O);

        let result = run(&mut board, true);
        let mov = result.best_move.expect("non-terminal position has a move");
        assert!(board.legal_moves().contains(&mov));
    }

    #[test]
    fn test_no_move_at_terminal_node() {
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[1] = Mark::X;
        cells[2] = Mark::X;
        cells[3] = Mark::O;
        cells[4] = Mark::O;
        let mut board = Board::from_cells(cells, Mark::O);

        let result = run(&mut board, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, LOSS_SCORE, "X already won at depth 0");
    }

    #[test]
    fn test_o_blocks_x_row_threat() {
        // X X . / . . . / . . .  with O to move: only index 2 avoids the loss
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[1] = Mark::X;
        let mut board = Board::from_cells(cells, Mark::O);

        let result = run(&mut board, true);
        assert_eq!(
            result.best_move,
            Some(Pos::from_index(2)),
            "O must block the completed row"
        );
    }

    #[test]
    fn test_o_prefers_win_over_block() {
        // X X . / O O . / . . .  with O to move: index 5 wins immediately
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[1] = Mark::X;
        cells[3] = Mark::O;
        cells[4] = Mark::O;
        let mut board = Board::from_cells(cells, Mark::O);

        let result = run(&mut board, true);
        assert_eq!(result.best_move, Some(Pos::from_index(5)));
        assert_eq!(result.score, WIN_SCORE - 1, "win on the very next ply");
    }

    #[test]
    fn test_x_prefers_win_over_block() {
        // X X . / O O . / . . .  with X to move: index 2 wins immediately
        let mut cells = [Mark::Empty; 9];
        cells[0] = Mark::X;
        cells[1] = Mark::X;
        cells[3] = Mark::O;
        cells[4] = Mark::O;
        let mut board = Board::from_cells(cells, Mark::X);

        let result = run(&mut board, false);
        assert_eq!(result.best_move, Some(Pos::from_index(2)));
        assert_eq!(result.score, LOSS_SCORE + 1);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        // O can win now (depth 1) or be left with a slower win; the
        // depth adjustment must favor the immediate one.
        let mut cells = [Mark::Empty; 9];
        cells[3] = Mark::O;
        cells[4] = Mark::O;
        cells[0] = Mark::X;
        cells[1] = Mark::X;
        let mut board = Board::from_cells(cells, Mark::O);

        let result = run(&mut board, true);
        assert_eq!(result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_ties_keep_earliest_move() {
        // Every first move from an empty board scores 0, so the first
        // legal move (index 0) must be kept.
        let mut board = Board::new(Mark::O);
        let result = run(&mut board, true);
        assert_eq!(result.best_move, Some(Pos::from_index(0)));

        let mut board = Board::new(Mark::X);
        let result = run(&mut board, false);
        assert_eq!(result.best_move, Some(Pos::from_index(0)));
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        fn count_unpruned(board: &mut Board, maximizing: bool, nodes: &mut u64) {
            *nodes += 1;
            if outcome(board) != Outcome::InProgress {
                return;
            }
            for mov in board.legal_moves() {
                board.apply_move(mov);
                count_unpruned(board, !maximizing, nodes);
                board.undo_move(mov);
            }
        }

        let mut board = Board::new(Mark::O);
        let pruned = run(&mut board, true).nodes;

        let mut full = 0;
        count_unpruned(&mut board, true, &mut full);
        assert!(
            pruned < full,
            "alpha-beta should cut the tree: {pruned} vs {full} nodes"
        );
    }

    #[test]
    fn test_pruned_matches_unpruned_on_reachable_boards() {
        // Compare score and chosen move against the reference on every
        // position reachable within two plies of the empty board, plus
        // deeper positions along a scripted game.
        fn compare(board: &mut Board, maximizing: bool) {
            let result = minimax(board, 0, i32::MIN, i32::MAX, maximizing);
            let (score, best_move) = unpruned(board, 0, maximizing);
            assert_eq!(result.score, score, "score mismatch on {:?}", board);
            assert_eq!(result.best_move, best_move, "move mismatch on {:?}", board);
        }

        fn sweep(board: &mut Board, maximizing: bool, plies_left: u32) {
            compare(board, maximizing);
            if plies_left == 0 || outcome(board) != Outcome::InProgress {
                return;
            }
            for mov in board.legal_moves() {
                board.apply_move(mov);
                sweep(board, !maximizing, plies_left - 1);
                board.undo_move(mov);
            }
        }

        let mut board = Board::new(Mark::O);
        sweep(&mut board, true, 2);

        let mut board = Board::new(Mark::X);
        sweep(&mut board, false, 2);

        // Scripted midgame: X 4, O 0, X 8, O 2, then compare each side
        let mut board = Board::new(Mark::X);
        for idx in [4, 0, 8, 2] {
            board.apply_move(Pos::from_index(idx));
            let maximizing = board.to_move() == Mark::O;
            compare(&mut board, maximizing);
        }
    }
}
