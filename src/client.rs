//! Typed HTTP client for the puzzle API.

use anyhow::{Context, Result, bail};
use reqwest::Response;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::puzzle::Puzzle;
use crate::server::{CreatePuzzleRequest, PuzzleList, SearchMatches, UpdatePuzzleRequest};

/// Typed client for the puzzle REST API.
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[allow(dead_code)]
    error: String,
    message: String,
}

impl PuzzleClient {
    /// Creates a client against the given base URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(base_url = %base_url, "Creating PuzzleClient");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Surfaces the server's error message on non-success responses.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {}", status),
        };
        bail!("API error ({}): {}", status, message)
    }

    /// Fetches the list of all available puzzle names.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<String>> {
        debug!("Fetching puzzle list");
        let response = self
            .client
            .get(format!("{}/api/nonograms/list", self.base_url))
            .send()
            .await
            .context("Failed to reach puzzle API")?;
        let list: PuzzleList = Self::check(response).await?.json().await?;
        info!(count = list.names.len(), "Puzzle list fetched");
        Ok(list.names)
    }

    /// Searches for puzzles whose clues contain the given query line.
    #[instrument(skip(self))]
    pub async fn search(&self, clue: &str) -> Result<Vec<String>> {
        debug!(clue = %clue, "Searching puzzles");
        let response = self
            .client
            .get(format!("{}/api/nonograms/search", self.base_url))
            .query(&[("clue", clue)])
            .send()
            .await
            .context("Failed to reach puzzle API")?;
        let result: SearchMatches = Self::check(response).await?.json().await?;
        info!(clue = %clue, count = result.matches.len(), "Search complete");
        Ok(result.matches)
    }

    /// Fetches a specific puzzle by name.
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Puzzle> {
        debug!(name = %name, "Fetching puzzle");
        let url = reqwest::Url::parse(&format!("{}/api/nonograms/{}", self.base_url, name))
            .context("Invalid puzzle URL")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to reach puzzle API")?;
        let puzzle: Puzzle = Self::check(response).await?.json().await?;
        info!(name = %puzzle.name(), "Puzzle fetched");
        Ok(puzzle)
    }

    /// Creates a new puzzle; the server derives the descriptors.
    #[instrument(skip(self, board), fields(name = %name))]
    pub async fn create(&self, name: &str, board: Vec<Vec<bool>>) -> Result<Puzzle> {
        info!("Creating puzzle");
        let request = CreatePuzzleRequest {
            name: name.to_string(),
            board,
        };
        let response = self
            .client
            .post(format!("{}/api/nonograms", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to reach puzzle API")?;
        let puzzle: Puzzle = Self::check(response).await?.json().await?;
        Ok(puzzle)
    }

    /// Replaces the board of an existing puzzle.
    #[instrument(skip(self, board), fields(name = %name))]
    pub async fn update(&self, name: &str, board: Vec<Vec<bool>>) -> Result<Puzzle> {
        info!("Updating puzzle");
        let url = reqwest::Url::parse(&format!("{}/api/nonograms/{}", self.base_url, name))
            .context("Invalid puzzle URL")?;
        let request = UpdatePuzzleRequest { board };
        let response = self
            .client
            .put(url)
            .json(&request)
            .send()
            .await
            .context("Failed to reach puzzle API")?;
        let puzzle: Puzzle = Self::check(response).await?.json().await?;
        Ok(puzzle)
    }
}
