use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use ui::Profile;
use walk_core::{SeedMode, SimulationRequest, WalkConfig, WalkMetrics, WalkPath, DEFAULT_STEPS};

use crate::{error::ApiError, state::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:session_id", delete(end_session))
        .route("/sessions/:session_id/walk", post(run_walk))
        .route("/walk/config", get(walk_config))
        .route("/profile", get(profile))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: u64,
}

#[derive(Debug, Deserialize)]
struct WalkRequestBody {
    #[serde(default = "default_step_count")]
    step_count: usize,
    #[serde(default)]
    seed_mode: SeedMode,
    #[serde(default)]
    regenerate: bool,
}

fn default_step_count() -> usize {
    DEFAULT_STEPS
}

#[derive(Debug, Serialize)]
struct WalkResponse {
    session_id: u64,
    seed: u32,
    seed_mode: SeedMode,
    step_count: usize,
    path: WalkPath,
    metrics: WalkMetrics,
}

async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let session_id = state.create_session()?;
    let location = format!("/sessions/{session_id}");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateSessionResponse { session_id }),
    ))
}

async fn end_session(
    State(state): State<AppState>,
    session_id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(session_id) = session_id?;
    state.end_session(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn run_walk(
    State(state): State<AppState>,
    session_id: Result<Path<u64>, PathRejection>,
    body: Result<Json<WalkRequestBody>, JsonRejection>,
) -> Result<Json<WalkResponse>, ApiError> {
    let Path(session_id) = session_id?;
    let Json(body) = body?;
    let request = SimulationRequest::new(body.step_count, body.seed_mode, body.regenerate)?;
    let outcome = state.run_walk(session_id, &request)?;

    Ok(Json(WalkResponse {
        session_id,
        seed: outcome.seed,
        seed_mode: outcome.seed_mode,
        step_count: request.step_count(),
        path: outcome.path,
        metrics: outcome.metrics,
    }))
}

async fn walk_config(State(state): State<AppState>) -> Json<WalkConfig> {
    Json(state.walk_config())
}

async fn profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile().clone())
}
