//! Search module for the computer player
//!
//! Contains the exhaustive minimax searcher.

pub mod minimax;

pub use minimax::{SearchResult, Searcher, WIN_SCORE};
