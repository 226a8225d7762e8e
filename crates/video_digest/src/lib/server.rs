use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{error::DigestError, transcript::TranscriptAcquirer, Summarizer, VideoDigest};

#[derive(Debug, Default, Deserialize)]
pub struct ProcessVideoRequest {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessVideoResponse {
    pub video_id: String,
    pub resumen: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Routes of the service, sharing one pipeline across requests
pub fn router<T, S>(digest: Arc<VideoDigest<T, S>>) -> Router
where
    T: TranscriptAcquirer + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/procesar-video", post(process_video::<T, S>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(digest)
}

async fn process_video<T, S>(
    State(digest): State<Arc<VideoDigest<T, S>>>,
    payload: Result<Json<ProcessVideoRequest>, JsonRejection>,
) -> Result<Json<ProcessVideoResponse>, DigestError>
where
    T: TranscriptAcquirer + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Rejected request body");
        DigestError::MissingInput
    })?;

    let video_id = request.video_id.unwrap_or_default();
    let digest = digest.process(&video_id).await?;

    Ok(Json(ProcessVideoResponse {
        video_id: digest.video_id,
        resumen: digest.summary,
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
