//! Text console front end
//!
//! Prompts for mode, marker and difficulty, then alternates human and
//! computer turns on a [`Game`] until someone wins or the board fills up.
//! Cells are numbered 1-9 on screen and translated to 0-8 for the core.
//!
//! Input and output are generic so the loop can be driven from tests:
//!
//! ```
//! use tictactoe::{console::Console, GameRng};
//!
//! let input = b"2\n1\n4\n2\n5\n3\nn\n";
//! let mut output = Vec::new();
//! Console::new(&input[..], &mut output, GameRng::new(0)).run().unwrap();
//! assert!(String::from_utf8(output).unwrap().contains("Player X wins!"));
//! ```

use std::io::{BufRead, Write};

use crate::board::Marker;
use crate::engine::Difficulty;
use crate::error::{Error, Result};
use crate::game::{Game, GameMode};
use crate::rng::GameRng;
use crate::rules::GameOutcome;

/// Console session over any line-based input and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    game: Game,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, rng: GameRng) -> Self {
        Self {
            input,
            output,
            game: Game::new(GameMode::default(), rng),
        }
    }

    /// Run games until the player declines another one, quits, or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Tic-Tac-Toe (Console) ===")?;
        loop {
            let Some(mode) = self.choose_mode()? else {
                return Ok(());
            };
            self.game.restart(mode);

            if !self.play_round()? {
                return Ok(());
            }

            let Some(again) = self.prompt("Play again? (y/n) [y]: ")? else {
                return Ok(());
            };
            let again = again.to_lowercase();
            if !(again.is_empty() || again.starts_with('y')) {
                writeln!(self.output, "Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    /// Play one game. Returns `false` if the player quit mid-game.
    fn play_round(&mut self) -> Result<bool> {
        self.print_board()?;
        while !self.game.is_over() {
            if self.game.is_computer_turn() {
                let marker = self.game.current_turn();
                let result = self.game.play_computer()?;
                if let Some(pos) = result.best_move {
                    writeln!(self.output, "Computer ({}) plays position {}.", marker, pos + 1)?;
                }
            } else {
                if self.game.mode() == GameMode::HumanVsHuman {
                    writeln!(self.output, "Current: {}", self.game.current_turn())?;
                }
                if !self.human_turn()? {
                    writeln!(self.output, "Exiting game.")?;
                    return Ok(false);
                }
            }
            self.print_board()?;
        }

        match self.game.outcome() {
            GameOutcome::Won(winner) => writeln!(self.output, "Player {} wins!", winner)?,
            GameOutcome::Draw => writeln!(self.output, "It's a tie!")?,
            GameOutcome::InProgress => {}
        }
        Ok(true)
    }

    /// Read moves until one is accepted. Returns `false` on quit or end of input.
    fn human_turn(&mut self) -> Result<bool> {
        let marker = self.game.current_turn();
        loop {
            let Some(choice) = self.prompt(&format!("Player {}, enter move (1-9): ", marker))?
            else {
                return Ok(false);
            };
            if matches!(choice.to_lowercase().as_str(), "q" | "quit" | "exit") {
                return Ok(false);
            }
            let Ok(number) = choice.parse::<usize>() else {
                writeln!(self.output, "Please enter a number between 1 and 9, or 'q' to quit.")?;
                continue;
            };
            // 0 maps past the board so apply_move rejects it
            let index = number.checked_sub(1).unwrap_or(usize::MAX);
            match self.game.play(index) {
                Ok(_) => return Ok(true),
                Err(Error::InvalidMove(err)) => {
                    log::debug!("rejected move: {}", err);
                    writeln!(self.output, "Invalid move: choose an empty cell number (1-9).")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn choose_mode(&mut self) -> Result<Option<GameMode>> {
        loop {
            writeln!(self.output, "Choose mode: 1) Human vs Computer   2) Human vs Human")?;
            let Some(choice) = self.prompt("Enter 1 or 2: ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => {
                    let Some(human) = self.choose_marker()? else {
                        return Ok(None);
                    };
                    let Some(difficulty) = self.choose_difficulty()? else {
                        return Ok(None);
                    };
                    return Ok(Some(GameMode::HumanVsComputer { human, difficulty }));
                }
                "2" => return Ok(Some(GameMode::HumanVsHuman)),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn choose_marker(&mut self) -> Result<Option<Marker>> {
        loop {
            let Some(choice) = self.prompt("Choose your marker (X or O) [default X]: ")? else {
                return Ok(None);
            };
            match choice.to_uppercase().as_str() {
                "" | "X" => return Ok(Some(Marker::X)),
                "O" => return Ok(Some(Marker::O)),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            writeln!(self.output, "Difficulty: 1) easy  2) medium  3) hard")?;
            let Some(choice) = self.prompt("Enter 1,2 or 3 [default 3]: ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "" | "3" => return Ok(Some(Difficulty::Hard)),
                "1" => return Ok(Some(Difficulty::Easy)),
                "2" => return Ok(Some(Difficulty::Medium)),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.game.board())?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, seed: u64) -> String {
        let mut output = Vec::new();
        Console::new(script.as_bytes(), &mut output, GameRng::new(seed))
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_hvh_win_transcript() {
        let out = run_script("2\n1\n4\n2\n5\n3\nn\n", 0);
        assert!(out.starts_with("=== Tic-Tac-Toe (Console) ==="));
        assert!(out.contains("Current: X"));
        assert!(out.contains("Current: O"));
        assert!(out.contains(" X | X | X "));
        assert!(out.contains("Player X wins!"));
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let out = run_script("2\nabc\n0\n10\n5\n5\nq\n", 0);
        assert!(out.contains("Please enter a number between 1 and 9, or 'q' to quit."));
        assert_eq!(out.matches("Invalid move: choose an empty cell").count(), 3);
        assert!(out.contains(" 4 | X | 6 "));
        assert!(out.ends_with("Exiting game.\n"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let out = run_script("7\n2\nquit\n", 0);
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Exiting game."));
    }

    #[test]
    fn test_computer_answers_corner_with_center() {
        let out = run_script("1\nX\n3\n1\nq\n", 0);
        assert!(out.contains("Computer (O) plays position 5."));
    }

    #[test]
    fn test_computer_moves_first_as_x() {
        let out = run_script("1\no\n3\nexit\n", 0);
        assert!(out.contains("Computer (X) plays position 1."));
        assert!(out.contains("Player O, enter move (1-9): "));
    }

    #[test]
    fn test_defaults_are_x_and_hard() {
        let out = run_script("1\n\n\nq\n", 0);
        assert!(out.contains("Player X, enter move (1-9): "));
        assert!(!out.contains("Computer ("));
    }

    #[test]
    fn test_play_again_restarts() {
        let out = run_script("2\n1\n4\n2\n5\n3\n\n2\nq\n", 0);
        assert_eq!(out.matches("Choose mode:").count(), 2);
        assert!(out.ends_with("Exiting game.\n"));
    }

    #[test]
    fn test_tie() {
        // X O X / X O O / O X X
        let out = run_script("2\n1\n2\n3\n5\n4\n6\n8\n7\n9\nn\n", 0);
        assert!(out.contains("It's a tie!"));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let out = run_script("", 0);
        assert!(out.contains("Enter 1 or 2: "));
        let out = run_script("2\n5\n", 0);
        assert!(out.contains("Player O, enter move (1-9): "));
    }
}
