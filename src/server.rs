//! REST API for the puzzle library.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, PuzzleRepository};
use crate::puzzle::{Puzzle, SolutionGrid, parse_clue_query};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    repository: PuzzleRepository,
}

impl AppState {
    /// Creates the server state around a repository.
    pub fn new(repository: PuzzleRepository) -> Self {
        Self { repository }
    }
}

/// Response listing all stored puzzle names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleList {
    /// Stored puzzle names.
    pub names: Vec<String>,
}

/// Response listing clue search matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatches {
    /// Names of matching puzzles.
    pub matches: Vec<String>,
}

/// Query parameters for clue search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Clue text, e.g. `"1,2,3"` or `"1 2 3"`.
    pub clue: String,
}

/// Request body for creating a puzzle. Descriptors are computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePuzzleRequest {
    /// Human-readable puzzle name.
    pub name: String,
    /// Solution board, row-major.
    pub board: Vec<Vec<bool>>,
}

/// Request body for replacing a puzzle's board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePuzzleRequest {
    /// New solution board, row-major.
    pub board: Vec<Vec<bool>>,
}

/// Typed API failure mapped onto an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// No puzzle with the requested name.
    NotFound(String),
    /// Request payload failed validation.
    BadRequest(String),
    /// Name collision on create.
    Conflict(String),
    /// Storage layer failure.
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };
        (status, Json(ApiErrorBody { error, message })).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        warn!(error = %err, "Storage failure surfaced to API");
        ApiError::Internal(err.message)
    }
}

/// Result alias for handler return types.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Builds the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/nonograms/list", get(list_puzzles))
        .route("/api/nonograms/search", get(search_puzzles))
        .route("/api/nonograms/{name}", get(get_puzzle).put(update_puzzle))
        .route("/api/nonograms", post(create_puzzle))
        .with_state(state)
}

/// Binds a listener and serves the API until shutdown.
#[instrument(skip(repository))]
pub async fn serve(host: &str, port: u16, repository: PuzzleRepository) -> anyhow::Result<()> {
    let state = AppState::new(repository);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host = %host, port, "Puzzle API ready");
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct Greeting {
    message: &'static str,
}

async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Welcome to the Nonogram Studio API",
    })
}

#[instrument(skip(state))]
async fn list_puzzles(State(state): State<AppState>) -> ApiResult<PuzzleList> {
    debug!("Listing puzzles");
    let names = state.repository.list_names()?;
    Ok(Json(PuzzleList { names }))
}

#[instrument(skip(state), fields(clue = %params.clue))]
async fn search_puzzles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchMatches> {
    debug!("Searching puzzles by clue");
    // An unparseable clue matches nothing rather than erroring.
    let matches = match parse_clue_query(&params.clue) {
        Some(clue) => state.repository.search_by_clue(&clue)?,
        None => Vec::new(),
    };
    Ok(Json(SearchMatches { matches }))
}

#[instrument(skip(state))]
async fn get_puzzle(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Puzzle> {
    debug!(name = %name, "Fetching puzzle");
    let puzzle = state
        .repository
        .get_by_name(&name)?
        .ok_or_else(|| ApiError::NotFound(format!("Nonogram with name '{}' not found", name)))?;
    Ok(Json(puzzle))
}

#[instrument(skip(state, req), fields(name = %req.name))]
async fn create_puzzle(
    State(state): State<AppState>,
    Json(req): Json<CreatePuzzleRequest>,
) -> ApiResult<Puzzle> {
    info!(name = %req.name, "Creating puzzle");

    let board = SolutionGrid::new(req.board).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let puzzle =
        Puzzle::new(req.name, board).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if state.repository.get_by_name(puzzle.name())?.is_some() {
        return Err(ApiError::Conflict(format!(
            "Nonogram with name '{}' already exists",
            puzzle.name()
        )));
    }

    let created = state.repository.create(&puzzle)?;
    info!(name = %created.name(), "Puzzle created");
    Ok(Json(created))
}

#[instrument(skip(state, req))]
async fn update_puzzle(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<UpdatePuzzleRequest>,
) -> ApiResult<Puzzle> {
    info!(name = %name, "Updating puzzle");

    let board = SolutionGrid::new(req.board).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let puzzle = Puzzle::new(name, board).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if !state.repository.update(&puzzle)? {
        return Err(ApiError::NotFound(format!(
            "Nonogram with name '{}' not found",
            puzzle.name()
        )));
    }
    Ok(Json(puzzle))
}
