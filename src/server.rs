//! HTTP surface for passphrase generation.
//!
//! Routes:
//! - `POST /api/generate-password` - generate from a JSON request
//! - `GET /api/generate-password` - usage document
//! - `GET /metrics` - Prometheus metrics
//! - `GET /health` - liveness

use crate::generator::{
    ErrorKind, GenerationError, GenerationRequest, PassphraseGenerator, DEFAULT_SEPARATOR,
    MAX_WORD_LENGTH, MIN_WORD_LENGTH,
};
use crate::metrics::MetricsRegistry;
use crate::pool::WordPoolProvider;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

/// Errors that can occur while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind to address: {0}")]
    Bind(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),
}

/// Configuration for the API server.
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Address to bind the server to.
    pub bind_addr: SocketAddr,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self::with_port(3000)
    }
}

impl ApiServerConfig {
    /// Creates a config with a custom port.
    pub fn with_port(port: u16) -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], port).into(),
        }
    }
}

/// State shared by all handlers.
pub struct AppState {
    generator: PassphraseGenerator<Box<dyn WordPoolProvider>>,
    defaults: GenerationRequest,
    metrics: MetricsRegistry,
}

impl AppState {
    pub fn new(
        generator: PassphraseGenerator<Box<dyn WordPoolProvider>>,
        defaults: GenerationRequest,
        metrics: MetricsRegistry,
    ) -> Self {
        Self {
            generator,
            defaults,
            metrics,
        }
    }
}

/// Request body; absent fields take the configured defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRequest {
    pub word_count: Option<i64>,
    pub word_lengths: Option<Vec<i64>>,
    pub separator: Option<String>,
}

impl WireRequest {
    pub fn into_request(self, defaults: &GenerationRequest) -> GenerationRequest {
        GenerationRequest {
            word_count: self.word_count.unwrap_or(defaults.word_count),
            word_lengths: self
                .word_lengths
                .unwrap_or_else(|| defaults.word_lengths.clone()),
            separator: self
                .separator
                .unwrap_or_else(|| defaults.separator.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    category: &'static str,
}

/// HTTP server exposing the generator.
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    pub fn new(config: ApiServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Starts the HTTP server and runs until it is shut down.
    pub async fn run(self) -> Result<(), ServerError> {
        let app = router(self.state);
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        tracing::info!(addr = %self.config.bind_addr, "API server listening");

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(e.to_string()))?;

        Ok(())
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/generate-password",
            get(usage_handler).post(generate_handler),
        )
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps an error kind to a response status.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Input => StatusCode::BAD_REQUEST,
        ErrorKind::DataUnavailable => StatusCode::NOT_FOUND,
        ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, error: String, category: &'static str) -> Response {
    (status, Json(ErrorBody { error, category })).into_response()
}

fn generation_error_response(error: &GenerationError) -> Response {
    let category = error
        .category()
        .map(|c| c.as_str())
        .unwrap_or_else(|| error.kind().as_str());
    error_response(status_for(error.kind()), error.to_string(), category)
}

async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<WireRequest>, JsonRejection>,
) -> Response {
    let wire = match body {
        Ok(Json(wire)) => wire,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text(), "body");
        }
    };
    let request = wire.into_request(&state.defaults);

    // Pool loading reads files.
    let worker = Arc::clone(&state);
    let joined = tokio::task::spawn_blocking(move || worker.generator.generate(&request)).await;
    let result = match joined {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Generation task failed");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to generate passphrase".to_string(),
                ErrorKind::Unexpected.as_str(),
            );
        }
    };

    state.metrics.record(&result);

    match result {
        Ok(passphrase) => (StatusCode::OK, Json(passphrase)).into_response(),
        Err(error) => {
            if error.kind() == ErrorKind::Unexpected {
                tracing::error!(error = %error, "Passphrase generation failed");
            }
            generation_error_response(&error)
        }
    }
}

/// Usage document for `GET /api/generate-password`.
pub fn usage() -> serde_json::Value {
    serde_json::json!({
        "message": "Passphrase generator API",
        "usage": {
            "method": "POST",
            "endpoint": "/api/generate-password",
            "parameters": {
                "wordCount": "number (1-10) - how many words to use",
                "wordLengths": "number[] (3-10) - word lengths to draw from",
                "separator": format!("string (optional) - placed between words (default: \"{DEFAULT_SEPARATOR}\")"),
            },
            "example": GenerationRequest::default(),
        },
        "availableWordLengths": (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).collect::<Vec<_>>(),
    })
}

async fn usage_handler() -> Json<serde_json::Value> {
    Json(usage())
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(output) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            output,
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {}", e),
        ),
    }
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
