//! Analysis history endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::models::HistoryResponse;
use crate::AppState;

/// GET /api/history
pub async fn list(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        items: state.history.list().await,
    })
}

/// DELETE /api/history
pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.history.clear().await;
    tracing::info!("Cleared analysis history");
    StatusCode::NO_CONTENT
}
