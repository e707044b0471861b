//! Command-line interface for nonogram_studio.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nonogram Studio - browse, search, play, and edit grid logic puzzles
#[derive(Parser, Debug)]
#[command(name = "nonogram_studio")]
#[command(about = "Terminal nonogram studio with a REST puzzle library", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Optional settings file (TOML). Flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the puzzle API server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db: Option<String>,
    },

    /// Run the studio terminal UI
    Tui {
        /// Puzzle API server URL
        #[arg(long)]
        server_url: Option<String>,
    },

    /// Import puzzles from a JSON library file
    Import {
        /// Path to the JSON file, keyed by puzzle name
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db: Option<String>,
    },
}
