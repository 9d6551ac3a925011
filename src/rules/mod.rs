//! Game rules for Tic-Tac-Toe
//!
//! This module implements the rule set:
//! - Win lines and winner detection
//! - Legal moves and move application
//! - Draw detection and overall game outcome

pub mod moves;
pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, is_full, legal_moves};
pub use outcome::{outcome, GameOutcome};
pub use win::{winner, winning_line, WinLine, WIN_LINES};
