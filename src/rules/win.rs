//! Win condition checking
//!
//! A marker wins by occupying all three cells of one of the eight lines.

use crate::board::{Board, Marker};

/// Three cell indices forming a row, column or diagonal
pub type WinLine = [usize; 3];

/// The eight winning lines
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// First completed line, if any
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        let cell = board.get(a);
        !cell.is_empty() && cell == board.get(b) && cell == board.get(c)
    })
}

/// Marker occupying a completed line.
///
/// Boards reached through `apply_move` stop at the first win, so at most
/// one marker can own a line; if several do, the first one found is returned.
pub fn winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).marker())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_with(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in x {
            board.place(i, Marker::X);
        }
        for &i in o {
            board.place(i, Marker::O);
        }
        board
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let board = board_with(&line, &[]);
            assert_eq!(winner(&board), Some(Marker::X), "line {:?}", line);
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_top_row_wins_regardless_of_rest() {
        let board = Board::from_cells([
            Cell::X, Cell::X, Cell::X,
            Cell::O, Cell::O, Cell::Empty,
            Cell::O, Cell::Empty, Cell::Empty,
        ]);
        assert_eq!(winner(&board), Some(Marker::X));
    }

    #[test]
    fn test_diagonal_o() {
        let board = board_with(&[0, 1], &[2, 4, 6]);
        assert_eq!(winner(&board), Some(Marker::O));
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_two_in_row_not_win() {
        let board = board_with(&[0, 1], &[3, 4]);
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_not_win() {
        let board = board_with(&[0, 2], &[1]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_lines_are_distinct_and_in_range() {
        for (i, a) in WIN_LINES.iter().enumerate() {
            assert!(a.iter().all(|&idx| idx < 9));
            for b in &WIN_LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
