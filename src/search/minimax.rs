//! Exhaustive minimax search
//!
//! Tic-Tac-Toe has at most 9 plies, so the whole tree is searched without
//! pruning. Scores are from the computer's point of view:
//!
//! - computer win: `WIN_SCORE - depth`
//! - human win: `depth - WIN_SCORE`
//! - draw: `0`
//!
//! where `depth` counts plies since the search started. Faster wins and
//! slower losses therefore score better.
//!
//! Moves are tried in ascending index order and only a strictly better
//! score replaces the current best, so ties go to the lowest index.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Marker};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(0, Marker::X);
//! board.place(1, Marker::X);
//! board.place(3, Marker::O);
//! board.place(4, Marker::O);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Marker::X, Marker::O);
//! assert_eq!(result.best_move, Some(2));
//! ```

use crate::board::{Board, Marker};
use crate::rules::{is_full, legal_moves, winner};

/// Score of a win found at depth 0
pub const WIN_SCORE: i32 = 10;

/// Bound used to seed the running best score
const INF: i32 = 999;

/// Search result containing the best move and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the root had no legal move
    pub best_move: Option<usize>,
    /// Minimax score of the root position
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Minimax searcher.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for the computer's best move, computer to play.
    ///
    /// The caller's board is not modified.
    #[must_use]
    pub fn search(&mut self, board: &Board, computer: Marker, human: Marker) -> SearchResult {
        let mut work = *board;
        self.search_in_place(&mut work, computer, human)
    }

    /// Same as [`search`](Self::search) but works directly on `board`,
    /// placing and removing markers as it goes. The board is restored
    /// before returning.
    #[must_use]
    pub fn search_in_place(
        &mut self,
        board: &mut Board,
        computer: Marker,
        human: Marker,
    ) -> SearchResult {
        debug_assert_ne!(computer, human);
        self.nodes = 0;

        #[cfg(debug_assertions)]
        let snapshot = *board;

        let (score, best_move) = self.minimax(board, 0, true, computer, human);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, snapshot, "search left markers on the board");

        log::debug!(
            "minimax: best={:?} score={} nodes={}",
            best_move,
            score,
            self.nodes
        );

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        computer: Marker,
        human: Marker,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;

        match winner(board) {
            Some(m) if m == computer => return (WIN_SCORE - depth, None),
            Some(_) => return (depth - WIN_SCORE, None),
            None if is_full(board) => return (0, None),
            None => {}
        }

        let mover = if maximizing { computer } else { human };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in legal_moves(board) {
            board.place(mov, mover);
            let (score, _) = self.minimax(board, depth + 1, !maximizing, computer, human);
            board.clear(mov);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mov);
            }
        }

        (best_score, best_move)
    }
}
