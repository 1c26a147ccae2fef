//! Battle arena console client.
//!
//! Thin I/O collaborator around `arena-runtime`: reads choices from stdin,
//! renders events to stdout. All game rules live in `arena-core`; this
//! binary only prompts, parses, and prints.

use anyhow::Result;
use arena_runtime::{GameRunner, roster_from_setup};
use tracing_subscriber::EnvFilter;

mod frontend;
mod prompt;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("==== Welcome to the Battle Arena ====");
    println!("1. Play");
    println!("2. Quit");
    match prompt::read_trimmed("Enter your choice: ").as_str() {
        "1" => play(),
        "2" => {
            println!("Thanks for playing! See you next time.");
            Ok(())
        }
        _ => {
            println!("Invalid choice. Please try again.");
            Ok(())
        }
    }
}

fn play() -> Result<()> {
    let count = prompt::player_count();
    tracing::debug!(count, "setting up roster");
    let roster = roster_from_setup(count, |_slot| prompt::combatant_setup())?;

    let mut runner = GameRunner::builder()
        .roster(roster)
        .provider(frontend::ConsoleProvider)
        .sink(frontend::ConsolePrinter)
        .build()?;

    // The winner announcement is rendered by the sink.
    let winner = runner.run()?;
    tracing::debug!(%winner, "game finished");
    Ok(())
}
