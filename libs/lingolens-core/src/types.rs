//! Core types shared across the engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Target language of the translations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 4] = [Self::Spanish, Self::French, Self::German, Self::Italian];

    /// Two-letter locale code used for speech recognition and synthesis.
    pub fn code(self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
        }
    }

    /// Look up a language by its locale code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Accepts either the display name (any case) or the locale code.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s) || l.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

/// Learner-facing settings: which language to learn and how confident the
/// detector must be before an object is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearnerSettings {
    pub language: Language,
    pub confidence_threshold: f64,
}

impl LearnerSettings {
    pub const MIN_THRESHOLD: f64 = 0.2;
    pub const MAX_THRESHOLD: f64 = 0.9;

    /// Reject thresholds the settings control cannot produce.
    pub fn validate(&self) -> Result<()> {
        let value = self.confidence_threshold;
        if !(Self::MIN_THRESHOLD..=Self::MAX_THRESHOLD).contains(&value) {
            return Err(CoreError::ThresholdOutOfRange {
                value,
                min: Self::MIN_THRESHOLD,
                max: Self::MAX_THRESHOLD,
            });
        }
        Ok(())
    }
}

impl Default for LearnerSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            confidence_threshold: 0.45,
        }
    }
}

/// A detected object reduced to what the engines consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    /// Source-language (English) name.
    pub label: String,
    /// Target-language rendering.
    pub translation: String,
    /// Detector confidence in [0, 1].
    pub confidence: f64,
}

impl DetectedItem {
    pub fn new(label: impl Into<String>, translation: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            translation: translation.into(),
            confidence,
        }
    }
}

/// Normalized (0.0 to 1.0) box enclosing a detected object.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub top_left_x: f64,
    pub top_left_y: f64,
    pub bottom_right_x: f64,
    pub bottom_right_y: f64,
}

/// One record of the vision service output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedObject {
    pub label: String,
    pub translation: String,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
}

impl DetectedObject {
    /// Drop the bounding box.
    pub fn item(&self) -> DetectedItem {
        DetectedItem {
            label: self.label.clone(),
            translation: self.translation.clone(),
            confidence: self.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("pt"), None);
    }

    #[test]
    fn language_parses_name_or_code() {
        assert_eq!("french".parse::<Language>().unwrap(), Language::French);
        assert_eq!(" German ".parse::<Language>().unwrap(), Language::German);
        assert_eq!("it".parse::<Language>().unwrap(), Language::Italian);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn default_language_is_spanish() {
        assert_eq!(Language::default(), Language::Spanish);
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = LearnerSettings::default();
        assert_eq!(settings.language, Language::Spanish);
        assert_eq!(settings.confidence_threshold, 0.45);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn threshold_outside_range_is_rejected() {
        let settings = LearnerSettings {
            confidence_threshold: 0.95,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CoreError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn detected_object_uses_camel_case_on_the_wire() {
        let json = r#"{
            "label": "cup",
            "translation": "taza",
            "confidence": 0.9,
            "boundingBox": {"topLeftX": 0.1, "topLeftY": 0.2, "bottomRightX": 0.3, "bottomRightY": 0.4}
        }"#;
        let object: DetectedObject = serde_json::from_str(json).unwrap();
        assert_eq!(object.bounding_box.bottom_right_y, 0.4);
        assert_eq!(object.item(), DetectedItem::new("cup", "taza", 0.9));
    }
}
