use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fairdice::console::StdioConsole;
use fairdice::dice::parse_dice;
use fairdice::game::{Game, Outcome};
use fairdice::rng::Entropy;

/// Non-transitive dice with provably fair commit-reveal rolls.
#[derive(Parser, Debug)]
#[command(name = "fairdice", about = "Play non-transitive dice against the program; every random outcome is provably fair.")]
struct Args {
    /// Dice configurations, one per die: six comma-separated integers each
    /// (at least three dice). Faces may be negative.
    #[arg(allow_hyphen_values = true)]
    dice: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dice = match parse_dice(&args.dice) {
        Ok(dice) => dice,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Arguments example: 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3");
            std::process::exit(2);
        }
    };
    info!(dice = dice.len(), "starting game");

    let mut console = StdioConsole::new();
    let mut game = Game::new(Entropy::new(), &mut console, dice);
    let outcome = game.run().context("game stopped by an I/O failure")?;
    match outcome {
        Outcome::Aborted => info!("player exited"),
        decided => info!(outcome = ?decided, rounds = game.transcripts().len(), "game over"),
    }

    // Normal completion and player-initiated exit both succeed.
    Ok(())
}
