//! Core vocabulary-learning library shared by the backend and front ends.
//!
//! Provides:
//! - Multiple-choice quiz generation and session scoring
//! - Pronunciation feedback (character-level LCS diff with accuracy verdict)
//! - Post-processing of object-detection results
//! - Vocabulary list bookkeeping and learner settings
//! - A speech capability trait for platform speech-to-text / synthesis

pub mod detection;
pub mod error;
pub mod pronunciation;
pub mod quiz;
pub mod session;
pub mod speech;
pub mod types;
pub mod vocabulary;

pub use detection::{filter_detections, parse_detections};
pub use error::{CoreError, Result};
pub use pronunciation::{align, evaluate, Alignment, DiffKind, DiffSegment, PronunciationFeedback, Verdict};
pub use quiz::{build_quiz, QuizQuestion};
pub use session::{QuizOutcome, QuizSession, QuizStep};
pub use speech::{practice, SpeechCapability};
pub use types::{BoundingBox, DetectedItem, DetectedObject, Language, LearnerSettings};
pub use vocabulary::{Vocabulary, VocabularyItem};
