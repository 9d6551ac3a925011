//! Computer player combining the minimax search with the difficulty policy
//!
//! | Difficulty | Behaviour |
//! |---|---|
//! | Easy | uniform random legal move, no search |
//! | Medium | minimax with probability 0.6, otherwise random |
//! | Hard | always minimax |
//!
//! Minimax only yields no move on a board without legal moves; in that case
//! the policy falls back to a random legal move, which also does not exist,
//! so callers must only ask for a move while the game is in progress.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiEngine, Board, Difficulty, Marker};
//!
//! let mut engine = AiEngine::with_seed(Difficulty::Hard, 42);
//! let mut board = Board::new();
//! board.place(4, Marker::X);
//!
//! let result = engine.get_move_with_stats(&board, Marker::O);
//! println!("Best move: {:?}", result.best_move);
//! println!("Strategy: {:?}", result.strategy);
//! ```

use std::fmt;
use std::time::Instant;

use crate::board::{Board, Marker};
use crate::rng::GameRng;
use crate::rules::legal_moves;
use crate::search::{SearchResult, Searcher};

/// Chance that Medium plays the minimax move instead of a random one
pub const MEDIUM_SEARCH_PROBABILITY: f64 = 0.6;

/// Computer strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform random legal move
    Random,
    /// Full minimax search
    Minimax,
    /// Search yielded nothing; random legal move instead
    Fallback,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move; `None` only when the board had no legal moves
    pub best_move: Option<usize>,
    /// Minimax score (0 when no search ran)
    pub score: i32,
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn random(pos: Option<usize>, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            strategy: Strategy::Random,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            strategy: Strategy::Minimax,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn fallback(pos: Option<usize>, result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: result.score,
            strategy: Strategy::Fallback,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Computer player.
///
/// Owns the searcher and the random source, so a seeded engine replays the
/// same choices for the same sequence of positions.
#[derive(Debug)]
pub struct AiEngine {
    searcher: Searcher,
    rng: GameRng,
    difficulty: Difficulty,
}

impl AiEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            searcher: Searcher::new(),
            rng,
            difficulty,
        }
    }

    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, GameRng::new(seed))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Move for `computer` on `board`, or `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, computer: Marker) -> Option<usize> {
        self.get_move_with_stats(board, computer).best_move
    }

    /// Move for `computer` plus how it was found.
    ///
    /// The human is assumed to play the other marker.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, computer: Marker) -> MoveResult {
        let result = pick_move(
            &mut self.searcher,
            &mut self.rng,
            self.difficulty,
            board,
            computer,
            computer.opponent(),
        );
        log::debug!(
            "{} ({}) picks {:?} via {:?}",
            computer,
            self.difficulty,
            result.best_move,
            result.strategy
        );
        result
    }
}

/// Difficulty policy shared by [`AiEngine`] and [`select_move`].
fn pick_move(
    searcher: &mut Searcher,
    rng: &mut GameRng,
    difficulty: Difficulty,
    board: &Board,
    computer: Marker,
    human: Marker,
) -> MoveResult {
    let start = Instant::now();
    let moves = legal_moves(board);

    let use_search = match difficulty {
        Difficulty::Easy => false,
        Difficulty::Medium => rng.gen_bool(MEDIUM_SEARCH_PROBABILITY),
        Difficulty::Hard => true,
    };

    if !use_search {
        return MoveResult::random(rng.choose(&moves), start.elapsed().as_millis() as u64);
    }

    let search = searcher.search(board, computer, human);
    let elapsed = start.elapsed().as_millis() as u64;
    match search.best_move {
        Some(_) => MoveResult::from_search(search, elapsed),
        None => {
            log::warn!("minimax found no move; falling back to a random one");
            MoveResult::fallback(rng.choose(&moves), search, elapsed)
        }
    }
}

/// Choose the computer's next move.
///
/// Returns one of `legal_moves(board)`. The board is left untouched.
///
/// # Panics
///
/// Panics if the board has no legal moves; check that the game is still in
/// progress before asking for a move.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer: Marker,
    human: Marker,
    rng: &mut GameRng,
) -> usize {
    debug_assert_ne!(computer, human);
    let result = pick_move(&mut Searcher::new(), rng, difficulty, board, computer, human);
    match result.best_move {
        Some(pos) => pos,
        None => panic!("select_move called on a board with no legal moves"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::rules::{apply_move, outcome, GameOutcome};

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
    fn test_difficulty_all_and_labels() {
        assert_eq!(Difficulty::ALL.len(), 3);
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_hard_answers_center_with_corner() {
        let board = board_with(&[4], &[]);
        let mut rng = GameRng::new(0);
        let pos = select_move(&board, Difficulty::Hard, Marker::O, Marker::X, &mut rng);
        assert!([0, 2, 6, 8].contains(&pos), "got edge {}", pos);
    }

    #[test]
    fn test_hard_completes_row() {
        let board = board_with(&[0, 1], &[3, 4]);
        let mut rng = GameRng::new(0);
        assert_eq!(select_move(&board, Difficulty::Hard, Marker::X, Marker::O, &mut rng), 2);
    }

    #[test]
    fn test_hard_o_plays_two() {
        let board = Board::from_cells([
            Cell::O, Cell::O, Cell::Empty,
            Cell::X, Cell::X, Cell::Empty,
            Cell::Empty, Cell::Empty, Cell::Empty,
        ]);
        let mut rng = GameRng::new(0);
        assert_eq!(select_move(&board, Difficulty::Hard, Marker::O, Marker::X, &mut rng), 2);
    }

    #[test]
    fn test_easy_seeded_is_legal_and_reproducible() {
        let board = board_with(&[0, 4], &[8]);
        let legal = legal_moves(&board);
        let mut a = GameRng::new(1234);
        let mut b = GameRng::new(1234);
        for _ in 0..100 {
            let pa = select_move(&board, Difficulty::Easy, Marker::O, Marker::X, &mut a);
            let pb = select_move(&board, Difficulty::Easy, Marker::O, Marker::X, &mut b);
            assert!(legal.contains(&pa));
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_easy_never_searches() {
        let mut engine = AiEngine::with_seed(Difficulty::Easy, 5);
        let result = engine.get_move_with_stats(&Board::new(), Marker::X);
        assert_eq!(result.strategy, Strategy::Random);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_medium_mixes_strategies() {
        let mut engine = AiEngine::with_seed(Difficulty::Medium, 77);
        let board = board_with(&[4], &[]);
        let mut searched = 0;
        let mut random = 0;
        for _ in 0..100 {
            let result = engine.get_move_with_stats(&board, Marker::O);
            assert!(legal_moves(&board).contains(&result.best_move.unwrap()));
            match result.strategy {
                Strategy::Minimax => searched += 1,
                Strategy::Random => random += 1,
                Strategy::Fallback => panic!("fallback on a live board"),
            }
        }
        assert!((40..=80).contains(&searched), "searched {}", searched);
        assert!(random >= 20, "random {}", random);
    }

    #[test]
    fn test_hard_always_searches() {
        let mut engine = AiEngine::with_seed(Difficulty::Hard, 3);
        let board = board_with(&[0, 1], &[3, 4]);
        let result = engine.get_move_with_stats(&board, Marker::X);
        assert_eq!(result.strategy, Strategy::Minimax);
        assert_eq!(result.best_move, Some(2));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_engine_full_board_has_no_move() {
        let mut engine = AiEngine::with_seed(Difficulty::Hard, 3);
        let board = Board::from_cells([
            Cell::X, Cell::O, Cell::X,
            Cell::X, Cell::O, Cell::O,
            Cell::O, Cell::X, Cell::X,
        ]);
        let result = engine.get_move_with_stats(&board, Marker::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.strategy, Strategy::Fallback);
    }

    #[test]
    #[should_panic(expected = "no legal moves")]
    fn test_select_move_full_board_panics() {
        let board = Board::from_cells([Cell::X; 9]);
        let mut rng = GameRng::new(0);
        let _ = select_move(&board, Difficulty::Easy, Marker::O, Marker::X, &mut rng);
    }

    #[test]
    fn test_select_move_leaves_board_untouched() {
        let board = board_with(&[0, 4], &[8]);
        let before = board;
        let mut rng = GameRng::new(8);
        for difficulty in Difficulty::ALL {
            let _ = select_move(&board, difficulty, Marker::X, Marker::O, &mut rng);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn test_hard_self_play_draws() {
        let mut x = AiEngine::with_seed(Difficulty::Hard, 1);
        let mut o = AiEngine::with_seed(Difficulty::Hard, 2);
        let mut board = Board::new();
        let mut turn = Marker::X;
        while outcome(&board) == GameOutcome::InProgress {
            let engine = if turn == Marker::X { &mut x } else { &mut o };
            let pos = engine.get_move(&board, turn).unwrap();
            apply_move(&mut board, pos, turn).unwrap();
            turn = turn.opponent();
        }
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = AiEngine::with_seed(Difficulty::Easy, 0);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
    }
}
