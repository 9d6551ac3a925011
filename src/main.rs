//! Tic-Tac-Toe
//!
//! Opens the graphical interface by default; `--console` plays in the
//! terminal instead.

use std::io;
use std::time::Duration;

use clap::Parser;
use flexi_logger::Logger;
use tictactoe::console::Console;
use tictactoe::ui::TicTacToeApp;
use tictactoe::GameRng;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about = "Tic-Tac-Toe against a friend or the computer")]
struct Config {
    /// Play in the terminal instead of opening a window
    #[arg(long, default_value_t = false)]
    console: bool,

    /// Seed for the computer's random choices (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the computer replies in the window, in milliseconds
    #[arg(long, default_value_t = 400)]
    delay_ms: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("rng seed {}", rng.seed());

    if config.console {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Console::new(stdin.lock(), stdout.lock(), rng).run()?;
        return Ok(());
    }

    let delay = Duration::from_millis(config.delay_ms);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([640.0, 440.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, rng, delay)))),
    )?;
    Ok(())
}
