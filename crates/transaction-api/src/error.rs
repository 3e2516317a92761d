//! HTTP-facing error type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use transaction_api_sdk::HandlerError;

/// Failure while answering an invocation
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl ApiError {
    /// HTTP status sent to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Handler(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to write output: {}", self);
        (self.status(), "Internal Server Error").into_response()
    }
}
