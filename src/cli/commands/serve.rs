//! HTTP API server for the learning app frontend.
//!
//! Provides REST endpoints for pronunciation scoring, word reordering and
//! video link parsing.

use super::video::VideoInfo;
use crate::cli::Output;
use crate::config::Settings;
use crate::media::VideoLink;
use crate::scoring::{Analysis, PronunciationScorer, Recognized};
use crate::script::reorder;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

/// Shared application state.
pub struct AppState {
    scorer: PronunciationScorer,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scorer: PronunciationScorer::with_settings(settings.scoring.clone()),
        }
    }
}

/// Build the API router.
pub fn router(settings: &Settings) -> anyhow::Result<Router> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let cors = match &settings.server.allowed_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid server.allowed_origin {:?}: {}", origin, e))?,
        ),
        None => cors.allow_origin(Any),
    };

    let state = Arc::new(AppState::new(settings));

    Ok(Router::new()
        .route("/health", get(health))
        .route("/score", post(score))
        .route("/reorder", post(reorder_words))
        .route("/video", post(video))
        .layer(cors)
        .with_state(state))
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let app = router(&settings)?;

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "api server listening");

    Output::header("telugu-tutor API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Score", "POST /score");
    Output::kv("Reorder", "POST /reorder");
    Output::kv("Video", "POST /video");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Text the learner was asked to say
    expected: String,
    /// Recognized transcript; absent when recognition failed
    #[serde(default)]
    actual: Option<String>,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    words: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ReorderResponse {
    words: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoRequest {
    url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl ToString) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

// === Handlers ===

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<Analysis>, ApiError> {
    if !(0.0..=1.0).contains(&req.confidence) {
        return Err(bad_request(format!(
            "confidence must be between 0.0 and 1.0, got {}",
            req.confidence
        )));
    }

    let recognized = req.actual.map(|text| Recognized {
        text,
        confidence: req.confidence,
    });
    let analysis = state.scorer.analyze(&req.expected, recognized.as_ref());
    debug!(
        simulated = analysis.is_simulated(),
        accuracy = analysis.result().accuracy,
        "scored request"
    );

    Ok(Json(analysis))
}

async fn reorder_words(Json(req): Json<ReorderRequest>) -> Json<ReorderResponse> {
    Json(ReorderResponse {
        words: req.words.iter().map(|w| reorder(w)).collect(),
    })
}

async fn video(Json(req): Json<VideoRequest>) -> Result<Json<VideoInfo>, ApiError> {
    let link = VideoLink::parse(&req.url).map_err(bad_request)?;
    Ok(Json(VideoInfo::from(&link)))
}
