//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - tic-tac-toe against an unbeatable minimax agent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to a match config (TOML). Defaults are used when absent.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Override the computer's thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Let the agent play itself and report the results
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },

    /// Ask the agent for its move on a given grid
    Suggest {
        /// Nine cells row-major, `.` for empty, e.g. "XO./.X./..."
        grid: String,

        /// The agent's marker
        #[arg(long, default_value = "X")]
        marker: String,

        /// The opponent's marker
        #[arg(long, default_value = "O")]
        opponent: String,

        /// Treat this as the first move of the game
        #[arg(long)]
        opening: bool,
    },
}
