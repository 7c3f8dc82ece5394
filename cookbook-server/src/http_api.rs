//! HTTP API for the cookbook: entry creation, name parsing, and recipe
//! summaries.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

use cookbook_core::{build_summary, normalize, parse_entry, resolve, Cookbook, RecipeSummary};

/// Application state shared across handlers.
///
/// Inserts take the write lock; summaries take the read lock. Entries are
/// immutable once inserted, so readers never see a half-written entry.
pub struct AppState {
    pub cookbook: RwLock<Cookbook>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            cookbook: RwLock::new(Cookbook::new()),
        }
    }
}

#[derive(Serialize)]
struct ParseResponse {
    msg: String,
}

#[derive(Deserialize)]
struct SummaryParams {
    name: Option<String>,
}

async fn health_check() -> &'static str {
    "OK"
}

/// POST /parse — canonicalize a handwritten recipe name.
async fn parse_name(Json(body): Json<serde_json::Value>) -> Result<Json<ParseResponse>, StatusCode> {
    let input = body
        .get("input")
        .and_then(|v| v.as_str())
        .ok_or(StatusCode::BAD_REQUEST)?;

    match normalize(input) {
        Some(msg) => Ok(Json(ParseResponse { msg })),
        None => {
            debug!("Rejected unparseable name: {:?}", input);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// POST /entry — add an ingredient or recipe to the cookbook.
///
/// The body is taken as raw JSON and parsed here so that malformed payloads
/// and semantic rejections both surface as the same plain 400.
async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<serde_json::Value>,
) -> StatusCode {
    let entry = match parse_entry(payload) {
        Ok(entry) => entry,
        Err(e) => {
            debug!("Rejected entry payload: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    let mut cookbook = state.cookbook.write().await;
    match cookbook.insert(entry) {
        Ok(()) => StatusCode::OK,
        Err(errors) => {
            for error in &errors {
                debug!("Rejected entry: {}", error);
            }
            StatusCode::BAD_REQUEST
        }
    }
}

/// GET /summary?name=... — flatten a recipe into base ingredients and total
/// cook time.
async fn recipe_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<RecipeSummary>, StatusCode> {
    let name = params.name.ok_or(StatusCode::BAD_REQUEST)?;

    let cookbook = state.cookbook.read().await;
    match resolve(&cookbook, &name) {
        Ok(resolution) => Ok(Json(build_summary(&name, &resolution))),
        Err(e) => {
            debug!("Failed to summarize '{}': {}", name, e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}

/// Build the cookbook router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse_name))
        .route("/entry", post(create_entry))
        .route("/summary", get(recipe_summary))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
