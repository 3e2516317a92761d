//! Error types for transaction handlers

use thiserror::Error;

/// Errors that can occur while producing an invocation response
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Serialization(_) => 500,
        }
    }
}
