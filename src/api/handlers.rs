use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthErrorResponse, HealthResponse, SpeakRequest};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn speak(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    // Validate input
    let text = match request.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(AppError::InvalidInput("Text cannot be empty".into())),
    };

    let params = request.voice_parameters();

    // Generate audio
    let wav = state.tts.speak(text, &params).await?;

    // Return audio response
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/wav"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"tts.wav\""),
        ],
        wav,
    )
        .into_response())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    match state.tts.probe().await {
        Ok(report) => Json(HealthResponse {
            status: "ok",
            espeak_available: report.available,
            espeak_version: report.version,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health probe failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthErrorResponse {
                    status: "error",
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
