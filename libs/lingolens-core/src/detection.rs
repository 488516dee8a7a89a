//! Post-processing of the vision service output.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::types::DetectedObject;

/// Decode the raw JSON returned by the detection/translation service.
///
/// The service is asked for a bare array; anything else is rejected.
pub fn parse_detections(payload: &str) -> Result<Vec<DetectedObject>> {
    let value: Value = serde_json::from_str(payload)?;
    detections_from_value(value)
}

/// Same as [`parse_detections`] for an already-decoded JSON value.
pub fn detections_from_value(value: Value) -> Result<Vec<DetectedObject>> {
    if !value.is_array() {
        return Err(CoreError::InvalidDetections(
            "expected a JSON array of objects".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Keep objects at or above `threshold`, then collapse duplicate labels to
/// the most confident one. Output follows the order labels were first seen.
pub fn filter_detections(objects: Vec<DetectedObject>, threshold: f64) -> Vec<DetectedObject> {
    let mut unique: Vec<DetectedObject> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for object in objects.into_iter().filter(|o| o.confidence >= threshold) {
        match index_by_label.get(&object.label) {
            Some(&idx) => {
                if object.confidence > unique[idx].confidence {
                    unique[idx] = object;
                }
            }
            None => {
                index_by_label.insert(object.label.clone(), unique.len());
                unique.push(object);
            }
        }
    }

    tracing::debug!(kept = unique.len(), threshold, "filtered detections");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;
    use pretty_assertions::assert_eq;

    fn object(label: &str, translation: &str, confidence: f64) -> DetectedObject {
        DetectedObject {
            label: label.to_string(),
            translation: translation.to_string(),
            confidence,
            bounding_box: BoundingBox::default(),
        }
    }

    #[test]
    fn parses_array_payload() {
        let payload = r#"[
            {"label": "chair", "translation": "silla", "confidence": 0.8,
             "boundingBox": {"topLeftX": 0, "topLeftY": 0, "bottomRightX": 1, "bottomRightY": 1}}
        ]"#;
        let objects = parse_detections(payload).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].translation, "silla");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_detections("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_detections(r#"{"label": "chair"}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDetections(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_detections("not json").is_err());
    }

    #[test]
    fn rejects_records_missing_fields() {
        let err = parse_detections(r#"[{"label": "chair"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDetections(_)));
    }

    #[test]
    fn drops_objects_below_threshold() {
        let kept = filter_detections(
            vec![object("cup", "taza", 0.44), object("pen", "bolígrafo", 0.45)],
            0.45,
        );
        assert_eq!(kept, vec![object("pen", "bolígrafo", 0.45)]);
    }

    #[test]
    fn duplicate_labels_keep_highest_confidence_in_first_seen_order() {
        let kept = filter_detections(
            vec![
                object("cup", "taza", 0.6),
                object("pen", "bolígrafo", 0.7),
                object("cup", "tazón", 0.9),
                object("cup", "vaso", 0.9),
            ],
            0.5,
        );
        assert_eq!(
            kept,
            vec![object("cup", "tazón", 0.9), object("pen", "bolígrafo", 0.7)]
        );
    }
}
