//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use lingolens_backend::models::{DetectedItem, Language, StartQuizRequest};

/// A single record as produced by the vision service.
pub fn detection(label: &str, translation: &str, confidence: f64) -> Value {
    json!({
        "label": label,
        "translation": translation,
        "confidence": confidence,
        "boundingBox": {
            "topLeftX": 0.1,
            "topLeftY": 0.1,
            "bottomRightX": 0.5,
            "bottomRightY": 0.5
        }
    })
}

/// Analysis request body with the given detections.
pub fn analysis_request(detections: Vec<Value>) -> Value {
    json!({
        "detections": detections,
        "image": "data:image/png;base64,AAAA"
    })
}

/// Spanish items used across quiz tests.
pub fn spanish_items() -> Vec<DetectedItem> {
    vec![
        DetectedItem::new("cat", "gato", 0.9),
        DetectedItem::new("dog", "perro", 0.85),
        DetectedItem::new("table", "mesa", 0.8),
        DetectedItem::new("chair", "silla", 0.75),
    ]
}

/// Quiz request with a fixed seed.
pub fn start_quiz_request(items: Vec<DetectedItem>, seed: u64) -> StartQuizRequest {
    StartQuizRequest {
        items,
        language: Some(Language::Spanish),
        seed: Some(seed),
    }
}
