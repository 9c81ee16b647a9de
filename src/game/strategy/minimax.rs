use crate::game::board::Board;
use crate::game::evaluator::evaluate_terminal;
use crate::game::types::{Mark, Outcome};

/// Exhaustive minimax. The depth argument decays per call but is never
/// compared against zero, so the search always runs to a terminal board;
/// only the alpha-beta strategy honors a real cutoff.
pub struct Minimax {
    target_depth: u32,
}

impl Minimax {
    pub fn new(target_depth: u32) -> Self {
        Self { target_depth }
    }

    pub fn choose_move(&self, board: &Board) -> Option<Board> {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for successor in board.successors(Mark::O) {
            if successor.winner() == Some(Mark::O) {
                return Some(successor);
            }

            let score = minimax(Mark::X, &successor, self.target_depth as i32);
            if score > best_score {
                best_score = score;
                best_move = Some(successor);
            }
        }

        best_move
    }
}

pub fn minimax(to_move: Mark, board: &Board, depth: i32) -> i32 {
    if board.outcome() != Outcome::InProgress {
        return evaluate_terminal(board);
    }

    match to_move {
        Mark::O => {
            let mut max_eval = i32::MIN;
            for successor in board.successors(Mark::O) {
                max_eval = max_eval.max(minimax(Mark::X, &successor, depth - 1));
            }
            max_eval
        }
        Mark::X => {
            let mut min_eval = i32::MAX;
            for successor in board.successors(Mark::X) {
                min_eval = min_eval.min(minimax(Mark::O, &successor, depth - 1));
            }
            min_eval
        }
        Mark::Empty => unreachable!("minimax is only called for X or O"),
    }
}
