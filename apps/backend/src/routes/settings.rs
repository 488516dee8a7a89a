//! Learner settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Json<LearnerSettings> {
    Json(*state.settings.read().await)
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<LearnerSettings>> {
    let mut current = state.settings.write().await;

    // Validate the merged value before committing it
    let mut updated = *current;
    if let Some(language) = request.language {
        updated.language = language;
    }
    if let Some(confidence_threshold) = request.confidence_threshold {
        updated.confidence_threshold = confidence_threshold;
    }
    updated.validate()?;

    *current = updated;
    tracing::info!(
        "Updated settings: language={}, threshold={}",
        updated.language,
        updated.confidence_threshold
    );

    Ok(Json(updated))
}
