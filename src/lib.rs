//! Tic-Tac-Toe engine with a minimax computer player
//!
//! Two humans, or a human against the computer at one of three
//! difficulty levels, on the classic 3x3 board. X always moves first.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board, cells, markers and positions
//! - [`rules`]: Win lines, legal moves, move application and outcome
//! - [`search`]: Exhaustive minimax search
//! - [`engine`]: Difficulty policy on top of the search
//! - [`game`]: One match with turn tracking, shared by both front ends
//! - [`console`]: Text front end
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{apply_move, outcome, select_move, Board, Difficulty, GameOutcome, GameRng, Marker};
//!
//! let mut board = Board::new();
//! let mut rng = GameRng::new(42);
//!
//! apply_move(&mut board, 4, Marker::X).unwrap();
//!
//! let reply = select_move(&board, Difficulty::Hard, Marker::O, Marker::X, &mut rng);
//! apply_move(&mut board, reply, Marker::O).unwrap();
//!
//! assert!([0, 2, 6, 8].contains(&reply));
//! assert_eq!(outcome(&board), GameOutcome::InProgress);
//! ```
//!
//! # Difficulty
//!
//! - Easy: random legal move
//! - Medium: minimax 60% of the time, random otherwise
//! - Hard: always minimax; never loses

pub mod board;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
pub mod rng;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Marker, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{select_move, AiEngine, Difficulty, MoveResult, Strategy};
pub use error::{Error, InvalidMove, Result};
pub use game::{Game, GameMode};
pub use rng::GameRng;
pub use rules::{apply_move, is_full, legal_moves, outcome, winner, GameOutcome, WIN_LINES};
