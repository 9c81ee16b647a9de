use std::collections::HashMap;

use crate::game::board::Board;
use crate::game::evaluator::evaluate_terminal;
use crate::game::types::{Mark, Outcome};

pub const DEFAULT_TARGET_DEPTH: u32 = 8;

/// Minimax with alpha-beta pruning and a memo of evaluated boards. The memo
/// is keyed by board alone: with scores bounded to {-1, 0, +1} and the
/// default depth deep enough to be exhaustive on 3x3, a board's score does
/// not depend on the window or the remaining depth it was computed under.
pub struct AlphaBeta {
    target_depth: u32,
    transposition: HashMap<Board, i32>,
}

impl AlphaBeta {
    pub fn new(target_depth: u32) -> Self {
        Self {
            target_depth,
            transposition: HashMap::new(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.transposition.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.transposition.len()
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Board> {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        for successor in board.successors(Mark::O) {
            if successor.winner() == Some(Mark::O) {
                return Some(successor);
            }

            let score = self.search(Mark::X, &successor, self.target_depth, i32::MIN, i32::MAX);
            if score > best_score {
                best_score = score;
                best_move = Some(successor);
            }
        }

        best_move
    }

    pub fn search(
        &mut self,
        to_move: Mark,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(&score) = self.transposition.get(board) {
            return score;
        }

        if depth == 0 || board.outcome() != Outcome::InProgress {
            let score = evaluate_terminal(board);
            self.transposition.insert(*board, score);
            return score;
        }

        match to_move {
            Mark::O => {
                let mut max_eval = i32::MIN;
                for successor in board.successors(Mark::O) {
                    let score = self.search(Mark::X, &successor, depth - 1, alpha, beta);
                    max_eval = max_eval.max(score);
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
                self.transposition.insert(*board, max_eval);
                max_eval
            }
            Mark::X => {
                let mut min_eval = i32::MAX;
                for successor in board.successors(Mark::X) {
                    let score = self.search(Mark::O, &successor, depth - 1, alpha, beta);
                    min_eval = min_eval.min(score);
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
                self.transposition.insert(*board, min_eval);
                min_eval
            }
            Mark::Empty => unreachable!("search is only called for X or O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::strategy::minimax::minimax;
    use Mark::{Empty as E, O, X};

    #[rustfmt::skip]
    fn midgame_boards() -> Vec<Board> {
        vec![
            Board::from_cells([
                [X, O, X],
                [O, X, E],
                [E, O, E],
            ]),
            Board::from_cells([
                [X, X, O],
                [O, O, X],
                [E, E, E],
            ]),
            Board::from_cells([
                [O, X, X],
                [X, O, E],
                [E, E, E],
            ]),
            Board::from_cells([
                [X, O, X],
                [E, O, E],
                [X, E, E],
            ]),
        ]
    }

    #[test]
    fn test_takes_immediate_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [O, O, E],
            [X, X, O],
            [X, E, E],
        ]);
        let chosen = AlphaBeta::new(DEFAULT_TARGET_DEPTH)
            .choose_move(&board)
            .unwrap();
        assert_eq!(chosen.winner(), Some(O));
    }

    #[test]
    fn test_scores_match_exhaustive_minimax() {
        for board in midgame_boards() {
            for to_move in [Mark::X, Mark::O] {
                let mut strategy = AlphaBeta::new(DEFAULT_TARGET_DEPTH);
                let pruned = strategy.search(to_move, &board, DEFAULT_TARGET_DEPTH, i32::MIN, i32::MAX);
                let exhaustive = minimax(to_move, &board, DEFAULT_TARGET_DEPTH as i32);
                assert_eq!(pruned, exhaustive, "disagreement on {:?} to move", to_move);
            }
        }
    }

    #[test]
    fn test_choose_move_matches_minimax_choice() {
        for board in midgame_boards() {
            let pruned = AlphaBeta::new(DEFAULT_TARGET_DEPTH).choose_move(&board);
            let exhaustive = crate::game::strategy::Minimax::new(DEFAULT_TARGET_DEPTH)
                .choose_move(&board);
            assert_eq!(pruned, exhaustive);
        }
    }

    #[test]
    fn test_cache_survives_and_shortcuts_repeat_searches() {
        let board = Board::new().with_mark(1, 1, X);
        let mut strategy = AlphaBeta::new(DEFAULT_TARGET_DEPTH);
        let first = strategy.search(Mark::O, &board, DEFAULT_TARGET_DEPTH, i32::MIN, i32::MAX);
        assert!(strategy.cache_len() > 0);
        // The repeat lookup is answered straight from the memo.
        let repeat = strategy.search(Mark::O, &board, 0, i32::MIN, i32::MAX);
        assert_eq!(first, repeat);
    }

    #[test]
    fn test_clearing_cache_does_not_change_scores() {
        for board in midgame_boards() {
            let mut strategy = AlphaBeta::new(DEFAULT_TARGET_DEPTH);
            let warm = strategy.search(Mark::X, &board, DEFAULT_TARGET_DEPTH, i32::MIN, i32::MAX);
            strategy.clear_cache();
            assert_eq!(strategy.cache_len(), 0);
            let cold = strategy.search(Mark::X, &board, DEFAULT_TARGET_DEPTH, i32::MIN, i32::MAX);
            assert_eq!(warm, cold);
        }
    }

    #[test]
    fn test_choose_move_none_on_full_board() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [X, O, O],
            [O, X, X],
        ]);
        assert!(AlphaBeta::new(DEFAULT_TARGET_DEPTH).choose_move(&board).is_none());
    }
}
