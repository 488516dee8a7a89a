//! Image analysis intake

use axum::{extract::State, Json};
use chrono::Utc;
use lingolens_core::detection::{detections_from_value, filter_detections};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/analysis
/// Accepts the vision service output, keeps confident unique objects and
/// records them in history and vocabulary.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    let settings = match payload.settings {
        Some(settings) => settings,
        None => *state.settings.read().await,
    };
    settings.validate()?;

    let objects = detections_from_value(payload.detections)?;
    if objects.is_empty() {
        return Err(ApiError::BadRequest(
            "No objects were detected in the image".to_string(),
        ));
    }

    let detected_objects = filter_detections(objects, settings.confidence_threshold);
    if detected_objects.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "No objects found with confidence above {}%",
            (settings.confidence_threshold * 100.0).round()
        )));
    }

    let now = Utc::now();
    let items: Vec<DetectedItem> = detected_objects.iter().map(DetectedObject::item).collect();
    let vocabulary_added = state
        .vocabulary
        .write()
        .await
        .add_detections(&items, settings.language, now);

    let record = AnalysisRecord {
        id: Uuid::new_v4(),
        timestamp: now,
        image: payload.image,
        detected_objects: detected_objects.clone(),
        settings,
    };
    let id = record.id;
    state.history.push(record).await;

    tracing::info!(
        "Recorded analysis {} with {} objects ({} new words)",
        id,
        detected_objects.len(),
        vocabulary_added
    );

    Ok(Json(AnalysisResponse {
        id,
        detected_objects,
        vocabulary_added,
    }))
}
