//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::EphemerisError;

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Ephemeris(EphemerisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Ephemeris(EphemerisError::OutOfCoverage { at, start, end }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new(
                    "OUT_OF_COVERAGE",
                    format!("{} is outside ephemeris coverage", at.to_rfc3339()),
                )
                .with_details(format!("{}/{}", start.to_rfc3339(), end.to_rfc3339())),
            ),
            AppError::Ephemeris(e) => {
                tracing::error!("Ephemeris failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("EPHEMERIS_ERROR", e.to_string()),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<EphemerisError> for AppError {
    fn from(err: EphemerisError) -> Self {
        AppError::Ephemeris(err)
    }
}
