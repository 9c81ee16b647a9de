pub mod alpha_beta;
pub mod minimax;
pub mod random_bfs;

pub use alpha_beta::{AlphaBeta, DEFAULT_TARGET_DEPTH};
pub use minimax::Minimax;
pub use random_bfs::RandomizedBfs;

use crate::game::board::Board;
use crate::game::session_rng::SessionRng;
use crate::game::types::StrategyKind;

pub enum Strategy {
    Minimax(Minimax),
    AlphaBeta(AlphaBeta),
    RandomizedBfs(RandomizedBfs),
}

impl Strategy {
    pub fn build(kind: StrategyKind, target_depth: u32, rng: SessionRng) -> Self {
        match kind {
            StrategyKind::Minimax => Strategy::Minimax(Minimax::new(target_depth)),
            StrategyKind::AlphaBeta => Strategy::AlphaBeta(AlphaBeta::new(target_depth)),
            StrategyKind::RandomizedBfs => Strategy::RandomizedBfs(RandomizedBfs::new(rng)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Minimax(_) => StrategyKind::Minimax,
            Strategy::AlphaBeta(_) => StrategyKind::AlphaBeta,
            Strategy::RandomizedBfs(_) => StrategyKind::RandomizedBfs,
        }
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<Board> {
        match self {
            Strategy::Minimax(strategy) => strategy.choose_move(board),
            Strategy::AlphaBeta(strategy) => strategy.choose_move(board),
            Strategy::RandomizedBfs(strategy) => strategy.choose_move(board),
        }
    }
}
