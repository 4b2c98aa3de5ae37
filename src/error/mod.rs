use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MalformedBody(String),
}

/// Failure shape for the mock preview endpoint: `{"success":0,"error":"..."}`.
///
/// The editor's link tool checks the numeric `success` discriminator before
/// reading anything else, so failures carry the same field as successes.
/// Malformed input is the only defined error; everything else the endpoint
/// sees (missing url, unparseable url, non-matching route) degrades
/// gracefully instead of erroring.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::MalformedBody(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(json!({ "success": 0, "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
