//! Web server for the Cyber Range dev setup.
//!
//! Serves the game's static assets from a local directory, accepts score
//! submissions on `/submit-score`, and redirects the root path to the
//! frontend dev origin.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

use crate::scores::{ScoreLog, ScoreRecord};
use crate::servers::cors::OpenCorsLayer;
use crate::CyberRangeError;

/// Body of a successful score submission response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

// Configuration for the dev server
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub port: u16,
    pub host: String,
    /// Directory static assets are served from
    pub static_root: PathBuf,
    /// CSV file scores are appended to
    pub score_file: PathBuf,
    /// Origin the root path redirects to
    pub redirect_target: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            static_root: PathBuf::from("."),
            score_file: PathBuf::from("scores.csv"),
            redirect_target: "http://localhost:3000".to_string(),
        }
    }
}

// Shared state handed to every handler
#[derive(Clone)]
struct AppState {
    scores: Arc<ScoreLog>,
    config: Arc<WebConfig>,
}

// Dev server main entry
pub struct WebServer {
    config: WebConfig,
    scores: Arc<ScoreLog>,
}

impl WebServer {
    pub fn new(config: WebConfig) -> Self {
        let scores = Arc::new(ScoreLog::new(&config.score_file));
        Self { config, scores }
    }

    /// Bind the configured address and serve until interrupted
    pub async fn start(&self) -> crate::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| CyberRangeError::Server(e.to_string()))?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 Starting server at http://localhost:{}",
            self.config.port
        );
        log::info!(
            "🏆 Scores will be saved to {}",
            std::path::absolute(self.scores.path())?.display()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CyberRangeError::Server(e.to_string()))?;

        log::info!("🛑 Server stopped.");
        Ok(())
    }

    /// The full route table, exposed so tests can drive it without a socket
    pub fn router(&self) -> Router {
        let state = AppState {
            scores: Arc::clone(&self.scores),
            config: Arc::new(self.config.clone()),
        };

        // Method routers fall back to the static handler so that, like the
        // fallback route, a non-GET request on these paths yields 404
        // rather than axum's default 405.
        Router::new()
            .route("/submit-score", post(submit_score).fallback(serve_static))
            .route("/", get(redirect_to_frontend).fallback(serve_static))
            .route("/index.html", get(redirect_to_frontend).fallback(serve_static))
            .fallback(serve_static)
            .layer(OpenCorsLayer)
            .with_state(state)
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// POST /submit-score: parse the body, append one row, answer with the
/// literal success body. Any parse or I/O failure becomes an empty 500.
async fn submit_score(State(state): State<AppState>, body: Bytes) -> Response {
    let record = match ScoreRecord::from_submission(&body) {
        Ok(record) => record,
        Err(e) => {
            log::error!("❌ Error saving score: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Err(e) = state.scores.append(&record) {
        log::error!("❌ Error saving score: {}", e);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    log::info!("🎯 Saved score: {} - {}", record.name, record.score);

    Json(ApiResponse {
        status: "success".to_string(),
        message: "Score saved".to_string(),
    })
    .into_response()
}

/// GET / and /index.html: 302 to the frontend dev origin
async fn redirect_to_frontend(State(state): State<AppState>) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.redirect_target.clone())],
    )
        .into_response()
}

/// Everything else: static assets for GET/HEAD, 404 for any other method
async fn serve_static(State(state): State<AppState>, req: Request) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    let content_type = static_content_type(req.uri().path());

    let mut response = match ServeDir::new(&state.config.static_root).oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    };

    if let Some(content_type) = content_type {
        if response.status().is_success() {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    response
}

/// Content types the game depends on, pinned on top of `ServeDir`'s
/// default type map
fn static_content_type(path: &str) -> Option<&'static str> {
    match path.rsplit('.').next().unwrap_or("") {
        "js" => Some("application/javascript"),
        "css" => Some("text/css"),
        "glb" => Some("model/gltf-binary"),
        "gltf" => Some("model/gltf+json"),
        _ => None,
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("❌ Failed to listen for shutdown signal: {}", e);
    }
}
