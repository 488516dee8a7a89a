//! API request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from lingolens-core
pub use lingolens_core::{
    DetectedItem, DetectedObject, DiffSegment, Language, LearnerSettings, PronunciationFeedback,
    QuizOutcome, QuizSession, Verdict, VocabularyItem,
};

// === History ===

/// One accepted image analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Opaque reference to the analysed image (data URL or storage key).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub detected_objects: Vec<DetectedObject>,
    pub settings: LearnerSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub items: Vec<AnalysisRecord>,
}

// === Analysis ===

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw output of the detection/translation service.
    pub detections: serde_json::Value,
    #[serde(default)]
    pub image: Option<String>,
    /// Overrides the stored settings for this analysis only.
    #[serde(default)]
    pub settings: Option<LearnerSettings>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub detected_objects: Vec<DetectedObject>,
    pub vocabulary_added: usize,
}

// === Settings ===

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub language: Option<Language>,
    pub confidence_threshold: Option<f64>,
}

// === Vocabulary ===

#[derive(Debug, Deserialize)]
pub struct VocabularyQuery {
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub items: Vec<VocabularyItem>,
}

// === Quiz ===

#[derive(Debug, Serialize, Deserialize)]
pub struct StartQuizRequest {
    pub items: Vec<DetectedItem>,
    /// Defaults to the stored settings' language.
    #[serde(default)]
    pub language: Option<Language>,
    /// Fixes the shuffle for reproducible quizzes.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub choice: String,
}

/// Current question as shown to the learner.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizStateResponse {
    pub session_id: Uuid,
    pub prompt: String,
    pub choices: Vec<String>,
    pub source_label: String,
    /// 1-based position of the current question.
    pub question_number: usize,
    pub total: usize,
    pub score: u32,
    pub selected_answer: Option<String>,
    pub answered_correctly: Option<bool>,
    /// Revealed once the question has been answered.
    pub correct_answer: Option<String>,
    pub is_last_question: bool,
}

impl QuizStateResponse {
    pub fn from_session(session_id: Uuid, session: &QuizSession) -> Self {
        let question = session.current_question();
        Self {
            session_id,
            prompt: question.prompt.clone(),
            choices: question.choices.clone(),
            source_label: question.source_label.clone(),
            question_number: session.current_index() + 1,
            total: session.total(),
            score: session.score(),
            selected_answer: session.selected_answer().map(str::to_string),
            answered_correctly: session.answered_correctly(),
            correct_answer: session
                .is_answered()
                .then(|| question.correct_answer.clone()),
            is_last_question: session.is_last_question(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResultResponse {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub feedback: String,
}

impl From<QuizOutcome> for QuizResultResponse {
    fn from(outcome: QuizOutcome) -> Self {
        Self {
            score: outcome.score,
            total: outcome.total,
            percentage: outcome.percentage(),
            feedback: outcome.feedback().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvanceResponse {
    InProgress(QuizStateResponse),
    Finished(QuizResultResponse),
}

// === Pronunciation ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PronunciationRequest {
    pub expected: String,
    pub transcript: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PronunciationResponse {
    pub verdict: Verdict,
    pub accuracy_ratio: f64,
    pub message: String,
    /// What the learner said, original case.
    pub heard: String,
    pub alignment: Vec<DiffSegment>,
    /// Matched and missed runs over the expected text.
    pub target_view: Vec<DiffSegment>,
    pub practice_targets: Vec<String>,
}

impl From<PronunciationFeedback> for PronunciationResponse {
    fn from(feedback: PronunciationFeedback) -> Self {
        let target_view = feedback.target_view().into_iter().cloned().collect();
        let practice_targets = feedback
            .practice_targets()
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            verdict: feedback.verdict,
            accuracy_ratio: feedback.accuracy_ratio,
            message: feedback.message().to_string(),
            heard: feedback.heard,
            alignment: feedback.alignment,
            target_view,
            practice_targets,
        }
    }
}
