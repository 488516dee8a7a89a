//! Pronunciation feedback endpoint

use axum::Json;
use lingolens_core::evaluate;

use crate::models::{PronunciationRequest, PronunciationResponse};

/// POST /api/pronunciation
pub async fn evaluate_attempt(Json(payload): Json<PronunciationRequest>) -> Json<PronunciationResponse> {
    let feedback = evaluate(&payload.expected, &payload.transcript);
    tracing::debug!(
        "Pronunciation of {:?}: {:?} ({:.2})",
        payload.expected,
        feedback.verdict,
        feedback.accuracy_ratio
    );
    Json(feedback.into())
}
