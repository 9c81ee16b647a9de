mod board;
mod controller;
mod evaluator;
mod session_rng;
mod types;

pub mod strategy;

pub use board::{BOARD_SIZE, Board};
pub use controller::{GameController, GamePhase};
pub use evaluator::evaluate_terminal;
pub use session_rng::SessionRng;
pub use types::{Mark, Outcome, Position, StrategyKind, WinningLine};
