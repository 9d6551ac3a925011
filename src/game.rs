//! Game session shared by the console and GUI shells
//!
//! A [`Game`] owns the one authoritative [`Board`] for a match, tracks whose
//! turn it is, and drives the computer player in human-vs-computer mode.
//! Shells only translate input into cell indices and render what `Game`
//! exposes.

use crate::board::{Board, Marker};
use crate::engine::{AiEngine, Difficulty, MoveResult};
use crate::error::{Error, Result};
use crate::rng::GameRng;
use crate::rules::{apply_move, outcome, winning_line, GameOutcome, WinLine};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the input
    HumanVsHuman,
    /// Human against the computer; the computer plays the other marker
    HumanVsComputer {
        human: Marker,
        difficulty: Difficulty,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsComputer {
            human: Marker::X,
            difficulty: Difficulty::Hard,
        }
    }
}

impl GameMode {
    /// Marker the computer plays, if any
    pub fn computer_marker(self) -> Option<Marker> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { human, .. } => Some(human.opponent()),
        }
    }

    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { difficulty, .. } => Some(difficulty),
        }
    }
}

/// One match from empty board to win or draw.
#[derive(Debug)]
pub struct Game {
    board: Board,
    mode: GameMode,
    current_turn: Marker,
    outcome: GameOutcome,
    last_move: Option<usize>,
    move_count: usize,
    engine: AiEngine,
}

impl Game {
    pub fn new(mode: GameMode, rng: GameRng) -> Self {
        let difficulty = mode.difficulty().unwrap_or_default();
        log::info!("new game: {:?}", mode);
        Self {
            board: Board::new(),
            mode,
            current_turn: Marker::X,
            outcome: GameOutcome::InProgress,
            last_move: None,
            move_count: 0,
            engine: AiEngine::new(difficulty, rng),
        }
    }

    /// Clear the board for another match in the same mode.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Marker::X;
        self.outcome = GameOutcome::InProgress;
        self.last_move = None;
        self.move_count = 0;
    }

    /// Switch mode and start over.
    pub fn restart(&mut self, mode: GameMode) {
        log::info!("new game: {:?}", mode);
        self.mode = mode;
        self.engine
            .set_difficulty(mode.difficulty().unwrap_or_default());
        self.reset();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_turn(&self) -> Marker {
        self.current_turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Completed line once the game is won
    pub fn winning_line(&self) -> Option<WinLine> {
        winning_line(&self.board)
    }

    /// Check if the side to move is the computer
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.mode.computer_marker() == Some(self.current_turn)
    }

    /// Check if the side to move is a human
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && !self.is_computer_turn()
    }

    /// Play a human move at `index` (0-8).
    pub fn play(&mut self, index: usize) -> Result<GameOutcome> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.is_computer_turn() {
            return Err(Error::NotYourTurn);
        }
        self.execute_move(index)?;
        Ok(self.outcome)
    }

    /// Let the computer choose and play its move.
    pub fn play_computer(&mut self) -> Result<MoveResult> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(Error::NotYourTurn);
        }

        let result = self.engine.get_move_with_stats(&self.board, self.current_turn);
        match result.best_move {
            Some(pos) => {
                self.execute_move(pos)?;
                Ok(result)
            }
            // unreachable while the outcome is InProgress
            None => Err(Error::GameOver),
        }
    }

    fn execute_move(&mut self, index: usize) -> Result<()> {
        let marker = self.current_turn;
        apply_move(&mut self.board, index, marker)?;

        self.last_move = Some(index);
        self.move_count += 1;
        self.outcome = outcome(&self.board);

        match self.outcome {
            GameOutcome::InProgress => self.current_turn = marker.opponent(),
            GameOutcome::Won(winner) => log::info!("{} wins after {} moves", winner, self.move_count),
            GameOutcome::Draw => log::info!("draw"),
        }
        Ok(())
    }
}
