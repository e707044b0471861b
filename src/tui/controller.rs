//! Studio controller — the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::client::PuzzleClient;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BrowseScreen, CreateScreen, EditScreen, PlayScreen};

/// Active screen in the studio state machine.
#[derive(Debug)]
enum ActiveScreen {
    Browse(BrowseScreen),
    Play(PlayScreen),
    Edit(EditScreen),
    Create(CreateScreen),
}

/// Controller that drives the studio state machine.
///
/// Owns the REST client; screens stay free of I/O and the controller
/// executes any transition that needs the network.
#[derive(Debug)]
pub struct StudioController {
    client: PuzzleClient,
    default_rows: usize,
    default_cols: usize,
}

impl StudioController {
    /// Creates a new studio controller.
    #[instrument(skip(client))]
    pub fn new(client: PuzzleClient, default_rows: usize, default_cols: usize) -> Self {
        info!("Creating StudioController");
        Self {
            client,
            default_rows,
            default_cols,
        }
    }

    /// Builds a browse screen from a fresh puzzle list.
    async fn browse_screen(&self, status: Option<String>) -> BrowseScreen {
        match self.client.list().await {
            Ok(names) => BrowseScreen::with_status(names, status),
            Err(e) => {
                warn!(error = %e, "Failed to load puzzle list");
                BrowseScreen::with_status(Vec::new(), Some(format!("Failed to load puzzles: {}", e)))
            }
        }
    }

    /// Runs the studio event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting studio event loop");

        let mut screen = ActiveScreen::Browse(self.browse_screen(None).await);

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::Browse(s) => s.render(f),
                ActiveScreen::Play(s) => s.render(f),
                ActiveScreen::Edit(s) => s.render(f),
                ActiveScreen::Create(s) => s.render(f),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            let transition = match &mut screen {
                ActiveScreen::Browse(s) => s.handle_key(key),
                ActiveScreen::Play(s) => s.handle_key(key),
                ActiveScreen::Edit(s) => s.handle_key(key),
                ActiveScreen::Create(s) => s.handle_key(key),
            };
            debug!(?transition, "Screen transition");

            match transition {
                ScreenTransition::Stay => {}
                ScreenTransition::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                ScreenTransition::GoToBrowse => {
                    screen = ActiveScreen::Browse(self.browse_screen(None).await);
                }
                ScreenTransition::Search { clue } => {
                    let outcome = self.client.search(&clue).await;
                    if let ActiveScreen::Browse(s) = &mut screen {
                        match outcome {
                            Ok(matches) => s.show_matches(&clue, matches),
                            Err(e) => s.set_status(format!("Search failed: {}", e)),
                        }
                    }
                }
                ScreenTransition::OpenPlay { name } => match self.client.get(&name).await {
                    Ok(puzzle) => screen = ActiveScreen::Play(PlayScreen::new(puzzle)),
                    Err(e) => {
                        warn!(name = %name, error = %e, "Failed to open puzzle for play");
                        if let ActiveScreen::Browse(s) = &mut screen {
                            s.set_status(format!("Failed to open '{}': {}", name, e));
                        }
                    }
                },
                ScreenTransition::OpenEdit { name } => match self.client.get(&name).await {
                    Ok(puzzle) => screen = ActiveScreen::Edit(EditScreen::for_puzzle(puzzle)),
                    Err(e) => {
                        warn!(name = %name, error = %e, "Failed to open puzzle for edit");
                        if let ActiveScreen::Browse(s) = &mut screen {
                            s.set_status(format!("Failed to open '{}': {}", name, e));
                        }
                    }
                },
                ScreenTransition::GoToCreate => {
                    screen =
                        ActiveScreen::Create(CreateScreen::new(self.default_rows, self.default_cols));
                }
                ScreenTransition::OpenBlankEditor { name, rows, cols } => {
                    screen = ActiveScreen::Edit(EditScreen::blank(name, rows, cols));
                }
                ScreenTransition::SavePuzzle {
                    name,
                    cells,
                    overwrite,
                } => {
                    let outcome = if overwrite {
                        self.client.update(&name, cells).await
                    } else {
                        self.client.create(&name, cells).await
                    };
                    if let ActiveScreen::Edit(s) = &mut screen {
                        match outcome {
                            Ok(_) => s.mark_saved(),
                            Err(e) => {
                                warn!(name = %name, error = %e, "Save failed");
                                s.set_error(format!("Save failed: {}", e));
                            }
                        }
                    }
                }
            }
        }
    }
}
