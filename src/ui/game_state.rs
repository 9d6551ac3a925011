//! Game state management for the Tic-Tac-Toe GUI
//!
//! Wraps the authoritative [`Game`] and adds the GUI-only concerns: a short
//! delay before the computer's reply so the human sees their own move
//! first, the last computer diagnostics, and a status message.

use std::time::{Duration, Instant};

use crate::error::Error;
use crate::{Game, GameMode, GameRng, MoveResult};

/// Default pause before the computer replies
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(400);

/// Pending computer move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    Scheduled { due: Instant },
}

/// Main GUI state
pub struct GameState {
    pub game: Game,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    ai_delay: Duration,
}

impl GameState {
    pub fn new(mode: GameMode, rng: GameRng, ai_delay: Duration) -> Self {
        Self {
            game: Game::new(mode, rng),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            ai_delay,
        }
    }

    /// Start over in the current mode
    pub fn reset(&mut self) {
        self.game.reset();
        self.clear_transient();
    }

    /// Start over in a new mode
    pub fn new_game(&mut self, mode: GameMode) {
        self.game.restart(mode);
        self.clear_transient();
    }

    fn clear_transient(&mut self) {
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    pub fn is_ai_pending(&self) -> bool {
        matches!(self.ai_state, AiState::Scheduled { .. })
    }

    /// Whether the board should react to clicks
    pub fn accepts_input(&self) -> bool {
        self.game.is_human_turn() && !self.is_ai_pending()
    }

    /// Attempt a human move at a clicked cell
    pub fn try_place(&mut self, idx: usize) -> Result<(), Error> {
        if self.is_ai_pending() {
            return Err(Error::NotYourTurn);
        }
        self.game.play(idx)?;
        self.message = None;
        Ok(())
    }

    /// Schedule the computer's move if it is its turn and nothing is pending
    pub fn schedule_ai(&mut self, now: Instant) {
        if self.game.is_computer_turn() && !self.is_ai_pending() {
            self.ai_state = AiState::Scheduled {
                due: now + self.ai_delay,
            };
        }
    }

    /// Play the computer's move once its delay has passed.
    ///
    /// Returns `true` if a move was made.
    pub fn poll_ai(&mut self, now: Instant) -> bool {
        let AiState::Scheduled { due } = self.ai_state else {
            return false;
        };
        if now < due {
            return false;
        }

        self.ai_state = AiState::Idle;
        match self.game.play_computer() {
            Ok(result) => {
                self.last_ai_result = Some(result);
                true
            }
            Err(err) => {
                log::warn!("computer move failed: {}", err);
                self.message = Some(err.to_string());
                false
            }
        }
    }

    /// Time left before the scheduled computer move
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Scheduled { due } => Some(due.saturating_duration_since(now)),
            AiState::Idle => None,
        }
    }
}
