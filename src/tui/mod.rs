//! Terminal UI for Nonogram Studio.

mod board;
mod controller;
mod screen;
mod screens;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

pub use controller::StudioController;
pub use screen::{Screen, ScreenTransition};
pub use screens::{BrowseScreen, CreateScreen, EditScreen, MAX_GRID_SIDE, PlayScreen};

use crate::client::PuzzleClient;

/// Runs the studio TUI against a puzzle API server.
pub async fn run_tui(server_url: String, default_rows: usize, default_cols: usize) -> Result<()> {
    // Log to a file so output never interferes with the TUI.
    let log_file = std::fs::File::create("nonogram_studio_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %server_url, "Starting Nonogram Studio TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = PuzzleClient::new(server_url);
    let mut controller = StudioController::new(client, default_rows, default_cols);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Studio loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
