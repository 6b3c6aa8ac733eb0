use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("espeak failed: {0}")]
    SynthesisFailed(String),

    #[error("espeak exited successfully but produced no audio")]
    EmptyOutput,

    #[error("espeak did not finish within {0:?}")]
    SynthesisTimeout(Duration),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::SynthesisFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SYNTHESIS_FAILED"),
            AppError::EmptyOutput => (StatusCode::INTERNAL_SERVER_ERROR, "EMPTY_OUTPUT"),
            AppError::SynthesisTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, "SYNTHESIS_TIMEOUT"),
            AppError::IoError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.to_string();

        if status.is_client_error() {
            tracing::warn!("Request rejected: {} - {}", code, message);
        } else {
            tracing::error!("Request failed: {} - {}", code, message);
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::SynthesisFailed("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::EmptyOutput, StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::SynthesisTimeout(Duration::from_secs(1)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_empty_output_message_differs_from_failure() {
        let empty = AppError::EmptyOutput.to_string();
        let failed = AppError::SynthesisFailed(String::new()).to_string();
        assert_ne!(empty, failed);
        assert!(empty.contains("no audio"));
    }
}
