use super::types::{Mark, Outcome, Position, WinningLine};

pub const BOARD_SIZE: usize = 3;

/// A board is a plain value: applying a mark produces a new board and never
/// touches the original. Search code relies on this when it backtracks, and
/// the alpha-beta cache relies on it to key boards directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn with_mark(&self, row: usize, col: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[row][col] = mark;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Mark::Empty)
            .count()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|line| line.mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        let cells = &self.cells;

        for i in 0..BOARD_SIZE {
            if cells[i][0] != Mark::Empty && cells[i][0] == cells[i][1] && cells[i][1] == cells[i][2]
            {
                return Some(WinningLine::new(
                    cells[i][0],
                    Position::new(i, 0),
                    Position::new(i, 2),
                ));
            }
            if cells[0][i] != Mark::Empty && cells[0][i] == cells[1][i] && cells[1][i] == cells[2][i]
            {
                return Some(WinningLine::new(
                    cells[0][i],
                    Position::new(0, i),
                    Position::new(2, i),
                ));
            }
        }

        if cells[0][0] != Mark::Empty && cells[0][0] == cells[1][1] && cells[1][1] == cells[2][2] {
            return Some(WinningLine::new(
                cells[0][0],
                Position::new(0, 0),
                Position::new(2, 2),
            ));
        }
        if cells[0][2] != Mark::Empty && cells[0][2] == cells[1][1] && cells[1][1] == cells[2][0] {
            return Some(WinningLine::new(
                cells[0][2],
                Position::new(0, 2),
                Position::new(2, 0),
            ));
        }

        None
    }

    /// Win is checked before fullness: on a won full board the win reports.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            return Outcome::Win(mark);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }

    /// One successor per empty cell, in row-major order. That order is the
    /// tie-break every strategy inherits, so it must not change.
    pub fn successors(&self, mark: Mark) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.empty_count());
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == Mark::Empty {
                    boards.push(self.with_mark(row, col, mark));
                }
            }
        }
        boards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_winner_row() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [O, O, O],
            [X, X, E],
            [E, E, X],
        ]);
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_winner_column() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, E],
            [X, O, E],
            [E, O, X],
        ]);
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [O, X, O],
            [E, E, X],
        ]);
        assert_eq!(board.winner(), Some(X));
        assert_eq!(board.outcome(), Outcome::Win(X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, X, O],
            [X, O, E],
            [O, E, E],
        ]);
        assert_eq!(board.winner(), Some(O));
    }

    #[test]
    fn test_no_winner_on_mixed_lines() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [O, X, O],
            [E, E, E],
        ]);
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [X, O, O],
            [O, X, X],
        ]);
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_winning_line_reports_endpoints() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [O, X, O],
            [E, E, X],
        ]);
        let line = board.winning_line().unwrap();
        assert_eq!(line.mark, X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(1, 1, X);
        assert_eq!(board.get(1, 1), E);
        assert_eq!(next.get(1, 1), X);
    }

    #[test]
    fn test_successors_count_matches_empty_cells() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, E],
            [E, X, E],
            [O, E, E],
        ]);
        let successors = board.successors(O);
        assert_eq!(successors.len(), board.empty_count());

        for successor in &successors {
            assert_eq!(successor.empty_count(), board.empty_count() - 1);

            let mut changed = Vec::new();
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if successor.get(row, col) != board.get(row, col) {
                        changed.push((row, col));
                    }
                }
            }
            assert_eq!(changed.len(), 1);
            let (row, col) = changed[0];
            assert_eq!(board.get(row, col), E);
            assert_eq!(successor.get(row, col), O);
        }
    }

    #[test]
    fn test_successors_are_row_major() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, E, E],
            [E, E, E],
            [E, E, E],
        ]);
        let successors = board.successors(O);
        // First empty cell in row-major order is (0, 1).
        assert_eq!(successors[0].get(0, 1), O);
        assert_eq!(successors[1].get(0, 2), O);
        assert_eq!(successors.last().unwrap().get(2, 2), O);
    }

    #[test]
    fn test_successors_empty_iff_full() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            [X, O, X],
            [X, O, O],
            [O, X, X],
        ]);
        assert!(board.successors(X).is_empty());
        assert!(!Board::new().successors(X).is_empty());
    }
}
