//! Legal moves and move application

use crate::board::{Board, Marker, TOTAL_CELLS};
use crate::error::InvalidMove;

/// All empty cell indices in ascending order
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..TOTAL_CELLS).filter(|&i| board.is_empty(i)).collect()
}

/// True iff no cell is empty
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Place `marker` at `index`.
///
/// Fails without touching the board if the index is off the board or the
/// cell is already taken.
pub fn apply_move(board: &mut Board, index: usize, marker: Marker) -> Result<(), InvalidMove> {
    if index >= TOTAL_CELLS {
        return Err(InvalidMove::OutOfRange { index });
    }
    if !board.is_empty(index) {
        return Err(InvalidMove::Occupied { index });
    }
    board.place(index, marker);
    Ok(())
}
