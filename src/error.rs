use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures talking to the YouTube Data API
#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("YouTube API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("YouTube API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid YouTube API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // TODO: surface upstream 5xx/transport failures as 502 once clients
        // stop treating every failure as a 400.
        let status = match &self {
            AppError::InvalidInput(_) | AppError::Upstream(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
