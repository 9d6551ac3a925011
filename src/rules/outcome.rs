//! Overall game outcome

use crate::board::{Board, Marker};

use super::moves::is_full;
use super::win::winner;

/// State of a game as seen from the board alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Marker),
    Draw,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Won if a line is complete, else Draw if the board is full, else InProgress
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(marker) = winner(board) {
        GameOutcome::Won(marker)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_empty_in_progress() {
        assert_eq!(outcome(&Board::new()), GameOutcome::InProgress);
        assert!(!GameOutcome::InProgress.is_over());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = Board::from_cells([
            Cell::X, Cell::O, Cell::X,
            Cell::X, Cell::O, Cell::O,
            Cell::O, Cell::X, Cell::X,
        ]);
        assert_eq!(outcome(&board), GameOutcome::Draw);
        assert!(GameOutcome::Draw.is_over());
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X
        // O O X
        // X O O
        let board = Board::from_cells([
            Cell::X, Cell::X, Cell::X,
            Cell::O, Cell::O, Cell::X,
            Cell::X, Cell::O, Cell::O,
        ]);
        assert_eq!(outcome(&board), GameOutcome::Won(Marker::X));
    }

    #[test]
    fn test_top_row_x_wins() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place(i, Marker::X);
        }
        board.place(4, Marker::O);
        board.place(8, Marker::O);
        assert_eq!(outcome(&board), GameOutcome::Won(Marker::X));
    }

    #[test]
    fn test_outcome_idempotent() {
        let mut board = Board::new();
        board.place(0, Marker::X);
        board.place(4, Marker::O);
        let first = outcome(&board);
        assert_eq!(outcome(&board), first);
    }
}
