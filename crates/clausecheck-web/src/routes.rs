//! HTTP routes and server startup.

use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use clausecheck_core::{AnalysisResult, Input, NoInputProvided};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{WebError, analyze_input, render};

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Largest accepted request body, uploads included.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8501)),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    text: String,
}

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze_form))
        .route("/api/analyze", post(analyze_json))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        max_upload_bytes = config.max_upload_bytes,
        "server listening"
    );
    axum::serve(listener, router(&config)).await
}

async fn index() -> Html<String> {
    Html(render::form_page())
}

async fn analyze_form(mut multipart: Multipart) -> Result<Html<String>, WebError> {
    let mut document = None;
    let mut text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => document = Some(field.bytes().await?.to_vec()),
            Some("text") => text = Some(field.text().await?),
            other => debug!(field = ?other, "ignoring form field"),
        }
    }

    let input = Input::select(document, text)?;
    let result = analyze_input(input)?;
    Ok(Html(render::result_page(&result)))
}

async fn analyze_json(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<Value>)> {
    if request.text.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": NoInputProvided.to_string() })),
        ));
    }
    Ok(Json(clausecheck_classify::classify(&request.text)))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
