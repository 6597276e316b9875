use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Upstream answered with a non-2xx status. `message` is the plain-text
    /// body we surface to the caller alongside the upstream's own status.
    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("request to upstream failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected upstream response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Upstream { status, message } => (status, message).into_response(),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            err => {
                // Detail stays in the log channel, not in the response body.
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
