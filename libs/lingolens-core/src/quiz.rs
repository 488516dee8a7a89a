//! Multiple-choice quiz generation.
//!
//! Distractors come from the union of the current batch's translations and
//! the learner's stored translations for the same language, so every choice
//! shown is a real word the learner has seen. When fewer than
//! [`MAX_DISTRACTORS`] alternatives exist the choice set shrinks; it is never
//! padded.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::DetectedItem;

/// Upper bound on wrong answers per question (four choices in total).
pub const MAX_DISTRACTORS: usize = 3;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    /// Unique choices, one of which is `correct_answer`.
    pub choices: Vec<String>,
    pub correct_answer: String,
    /// Label of the item this question was generated from.
    pub source_label: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Prompt shown for an item.
pub fn prompt_for(label: &str) -> String {
    format!("What is the translation for \"{}\"?", label)
}

/// Build one question per item, in random order.
///
/// `historical_translations` must already be restricted to the quiz's target
/// language. An empty `items` slice yields an empty quiz.
pub fn build_quiz<R>(
    items: &[DetectedItem],
    historical_translations: &[String],
    rng: &mut R,
) -> Vec<QuizQuestion>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Vec::new();
    }

    let pool = distractor_pool(items, historical_translations);

    let mut questions: Vec<QuizQuestion> = items
        .iter()
        .map(|item| {
            let correct = item.translation.as_str();

            let mut candidates: Vec<&str> =
                pool.iter().copied().filter(|t| *t != correct).collect();
            candidates.shuffle(rng);
            candidates.truncate(MAX_DISTRACTORS);

            let mut choices: Vec<String> = Vec::with_capacity(candidates.len() + 1);
            choices.push(correct.to_string());
            choices.extend(candidates.into_iter().map(str::to_string));
            choices.shuffle(rng);

            QuizQuestion {
                prompt: prompt_for(&item.label),
                choices,
                correct_answer: correct.to_string(),
                source_label: item.label.clone(),
            }
        })
        .collect();

    // Question order must not follow item order.
    questions.shuffle(rng);

    tracing::debug!(
        questions = questions.len(),
        pool = pool.len(),
        "built quiz"
    );
    questions
}

/// Deduplicated union of batch and historical translations, in first-seen
/// order so a seeded generator reproduces the same quiz.
fn distractor_pool<'a>(items: &'a [DetectedItem], historical: &'a [String]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|i| i.translation.as_str())
        .chain(historical.iter().map(String::as_str))
        .filter(|t| seen.insert(*t))
        .collect()
}
