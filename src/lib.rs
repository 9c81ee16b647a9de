pub mod config;
pub mod game;
pub mod logger;

pub use config::EngineConfig;
pub use game::{
    Board, GameController, GamePhase, Mark, Outcome, Position, StrategyKind, WinningLine,
};
