use crate::config::EngineConfig;
use crate::game::board::{BOARD_SIZE, Board};
use crate::game::session_rng::SessionRng;
use crate::game::strategy::Strategy;
use crate::game::types::{Mark, Outcome, StrategyKind};
use crate::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingHumanMove,
    AwaitingEngineMove,
    GameOver(Outcome),
}

/// Turn orchestration for one game session. The human always plays X and the
/// engine always answers as O within the same `submit_move` call; by the time
/// control returns to the caller the phase is either `AwaitingHumanMove`
/// again or `GameOver`.
pub struct GameController {
    board: Board,
    phase: GamePhase,
    strategy: Strategy,
    config: EngineConfig,
}

impl GameController {
    pub fn new(kind: StrategyKind) -> Self {
        Self::from_config(&EngineConfig {
            strategy: kind,
            ..EngineConfig::default()
        })
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            board: Board::new(),
            phase: GamePhase::AwaitingHumanMove,
            strategy: build_strategy(config),
            config: config.clone(),
        }
    }

    pub fn current_board(&self) -> Board {
        self.board
    }

    pub fn current_outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Switching strategies rebuilds the picker, so the alpha-beta cache
    /// never carries over between strategies or games.
    pub fn configure_strategy(&mut self, kind: StrategyKind) {
        self.config.strategy = kind;
        self.strategy = build_strategy(&self.config);
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = GamePhase::AwaitingHumanMove;
        self.strategy = build_strategy(&self.config);
    }

    /// The one mutating entry point. A rejected move is feedback for the
    /// caller's UI, never a fault: controller state is left untouched.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), String> {
        if matches!(self.phase, GamePhase::GameOver(_)) {
            return Err("Game is already over".to_string());
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }
        if self.board.get(row, col) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board = self.board.with_mark(row, col, Mark::X);
        if self.finish_if_over() {
            return Ok(());
        }

        self.phase = GamePhase::AwaitingEngineMove;
        self.play_engine_turn();
        Ok(())
    }

    fn play_engine_turn(&mut self) {
        match self.strategy.choose_move(&self.board) {
            Some(next) => {
                self.board = next;
                if !self.finish_if_over() {
                    self.phase = GamePhase::AwaitingHumanMove;
                }
            }
            None => {
                // No legal reply left; resolved as a draw, never a fault.
                self.phase = GamePhase::GameOver(Outcome::Draw);
                log!("DRAW!");
            }
        }
    }

    fn finish_if_over(&mut self) -> bool {
        match self.board.outcome() {
            Outcome::InProgress => false,
            outcome => {
                self.phase = GamePhase::GameOver(outcome);
                match outcome {
                    Outcome::Win(mark) => log!("WINNER {:?}", mark),
                    _ => log!("DRAW!"),
                }
                true
            }
        }
    }
}

fn build_strategy(config: &EngineConfig) -> Strategy {
    let rng = match config.rng_seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    Strategy::build(config.strategy, config.target_depth, rng)
}
