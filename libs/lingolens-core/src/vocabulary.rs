//! The learner's running vocabulary list.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DetectedItem, Language};

/// A word the learner has encountered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    /// English label.
    pub word: String,
    pub translation: String,
    pub language: Language,
    pub added: DateTime<Utc>,
}

/// Vocabulary list, newest entries first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    items: Vec<VocabularyItem>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<VocabularyItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items for one language.
    pub fn for_language(&self, language: Language) -> impl Iterator<Item = &VocabularyItem> {
        self.items.iter().filter(move |i| i.language == language)
    }

    /// Stored translations for `language`, the historical distractor pool.
    pub fn translations_for(&self, language: Language) -> Vec<String> {
        self.for_language(language)
            .map(|i| i.translation.clone())
            .collect()
    }

    /// Add words whose label (case-insensitive) is new for `language`.
    /// New words go before existing ones, in batch order. Returns how many
    /// were added.
    pub fn add_detections(
        &mut self,
        items: &[DetectedItem],
        language: Language,
        now: DateTime<Utc>,
    ) -> usize {
        let mut known: HashSet<String> = self
            .for_language(language)
            .map(|i| i.word.to_lowercase())
            .collect();

        let added: Vec<VocabularyItem> = items
            .iter()
            .filter(|item| known.insert(item.label.to_lowercase()))
            .map(|item| VocabularyItem {
                word: item.label.clone(),
                translation: item.translation.clone(),
                language,
                added: now,
            })
            .collect();

        let count = added.len();
        if count > 0 {
            self.items.splice(0..0, added);
        }
        tracing::debug!(added = count, %language, "updated vocabulary");
        count
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
