//! Board structure

use std::fmt;

use super::{Cell, Marker, TOTAL_CELLS};

/// Game board: 9 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells. Does not check move alternation.
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get cell at index
    ///
    /// Panics if `idx` is not a valid cell index.
    #[inline]
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Check if cell is empty (out-of-range counts as not empty)
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(|c| c.is_empty())
    }

    /// Place a marker without any validation.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, idx: usize, marker: Marker) {
        self.cells[idx] = marker.into();
    }

    /// Reset a cell to Empty
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.cells[idx] = Cell::Empty;
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of non-empty cells
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells holding the given marker
    pub fn count(&self, marker: Marker) -> usize {
        let target = Cell::from(marker);
        self.cells.iter().filter(|&&c| c == target).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Text rendering used by the console: empty cells show their 1-based number.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let cell = |i: usize| match self.cells[i].marker() {
                Some(m) => m.symbol(),
                None => char::from(b'1' + i as u8),
            };
            let base = row * 3;
            writeln!(f, " {} | {} | {} ", cell(base), cell(base + 1), cell(base + 2))?;
        }
        Ok(())
    }
}
