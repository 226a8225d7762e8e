use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::transcript::AcquireError;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("video_id required")]
    MissingInput,
    #[error("transcript acquisition failed: {0}")]
    Acquire(#[from] AcquireError),
    #[error("summarization failed: {0}")]
    SummarizationFailed(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl DigestError {
    /// Status code and caller facing message. Never carries internal detail.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Self::MissingInput => (StatusCode::BAD_REQUEST, "video_id required"),
            Self::Acquire(AcquireError::NoCaptionsFound { .. }) => {
                (StatusCode::NOT_FOUND, "no captions found for video")
            }
            Self::Acquire(AcquireError::ConfigurationMissing(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "service is not configured")
            }
            Self::Acquire(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "could not retrieve transcript",
            ),
            Self::SummarizationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "could not generate summary")
            }
        }
    }
}

impl IntoResponse for DigestError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        (status, Json(ErrorBody { error })).into_response()
    }
}
