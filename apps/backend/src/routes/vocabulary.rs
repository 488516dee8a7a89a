//! Vocabulary endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::models::{VocabularyQuery, VocabularyResponse};
use crate::AppState;

/// GET /api/vocabulary
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<VocabularyQuery>,
) -> Json<VocabularyResponse> {
    let vocabulary = state.vocabulary.read().await;
    let items = match query.language {
        Some(language) => vocabulary.for_language(language).cloned().collect(),
        None => vocabulary.items().to_vec(),
    };
    Json(VocabularyResponse { items })
}

/// DELETE /api/vocabulary
pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.vocabulary.write().await.clear();
    tracing::info!("Cleared vocabulary");
    StatusCode::NO_CONTENT
}
