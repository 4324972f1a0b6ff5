use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use pagesift_core::ExtractError;

use crate::models::{ErrorResponse, PagesResponse};
use crate::state::AppState;
use crate::upload;

/// `POST /extract/pdf` — multipart form with a `file` field containing the
/// document bytes. Returns the full per-page text, or one of the two
/// terminal error payloads.
pub async fn extract(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let file = match upload::parse_multipart(multipart).await {
        Ok(Some(file)) => file,
        // An absent `file` field fails before any backend is consulted.
        Ok(None) => return error_response(&ExtractError::MissingInput),
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };

    tracing::debug!(
        filename = %file.filename,
        bytes = file.data.len(),
        "received document for extraction"
    );

    // Extraction is synchronous and CPU-bound; keep it off the async runtime.
    let result = tokio::task::spawn_blocking(move || state.coordinator.extract(&file.data)).await;

    match result {
        Ok(Ok(document)) => (StatusCode::OK, Json(PagesResponse::from(&document))).into_response(),
        Ok(Err(e)) => error_response(&e),
        Err(e) => {
            tracing::error!(error = %e, "extraction task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "extraction task failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn error_response(error: &ExtractError) -> Response {
    let status = match error {
        ExtractError::MissingInput => StatusCode::BAD_REQUEST,
        ExtractError::NoExtractorAvailable => StatusCode::NOT_IMPLEMENTED,
    };
    (status, Json(ErrorResponse::from(error))).into_response()
}
