use super::board::Board;
use super::types::Mark;

/// Score of a board from the engine's point of view: -1 when X has a line,
/// +1 when O has one, 0 otherwise. Meant for terminal boards and depth
/// cutoffs; a non-terminal board scores 0, the same as a draw.
pub fn evaluate_terminal(board: &Board) -> i32 {
    match board.winner() {
        Some(Mark::X) => -1,
        Some(Mark::O) => 1,
        _ => 0,
    }
}
