//! Quiz session state.
//!
//! A session is a plain value moved through [`QuizSession::submit_answer`]
//! and [`QuizSession::advance`]. Advancing past the last question consumes
//! the session and yields a [`QuizOutcome`], so a finished quiz cannot be
//! answered or advanced again.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::quiz::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: u32,
    selected_answer: Option<String>,
    answered_correctly: Option<bool>,
}

/// Unchecked wire form of a session.
#[derive(Deserialize)]
struct SessionRecord {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: u32,
    selected_answer: Option<String>,
    answered_correctly: Option<bool>,
}

impl TryFrom<SessionRecord> for QuizSession {
    type Error = CoreError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        if record.current_index >= record.questions.len() {
            return Err(CoreError::InvalidSession(format!(
                "question index {} out of {} questions",
                record.current_index,
                record.questions.len()
            )));
        }
        if record.selected_answer.is_some() != record.answered_correctly.is_some() {
            return Err(CoreError::InvalidSession(
                "selected answer and correctness must be set together".to_string(),
            ));
        }
        Ok(Self {
            questions: record.questions,
            current_index: record.current_index,
            score: record.score,
            selected_answer: record.selected_answer,
            answered_correctly: record.answered_correctly,
        })
    }
}

/// Result of [`QuizSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    InProgress(QuizSession),
    Finished(QuizOutcome),
}

impl QuizStep {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl QuizSession {
    /// Start a session on the first question. Returns `None` for an empty
    /// quiz, which has nothing to ask.
    pub fn start(questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            answered_correctly: None,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn answered_correctly(&self) -> Option<bool> {
        self.answered_correctly
    }

    pub fn is_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Record an answer for the current question. A second answer to the
    /// same question is ignored.
    pub fn submit_answer(mut self, choice: &str) -> Self {
        if self.is_answered() {
            tracing::warn!(index = self.current_index, "question already answered");
            return self;
        }

        let correct = self.current_question().is_correct(choice);
        self.selected_answer = Some(choice.to_string());
        self.answered_correctly = Some(correct);
        if correct {
            self.score += 1;
        }
        self
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// Unanswered questions are forfeited; enforcing an answer first is up to
    /// the caller.
    pub fn advance(mut self) -> QuizStep {
        if self.is_last_question() {
            return QuizStep::Finished(QuizOutcome {
                score: self.score,
                total: self.questions.len(),
            });
        }

        self.current_index += 1;
        self.selected_answer = None;
        self.answered_correctly = None;
        QuizStep::InProgress(self)
    }
}

/// Final score of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: usize,
}

impl QuizOutcome {
    /// Score as a rounded percentage, 0 for an empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.score) / self.total as f64 * 100.0).round() as u32
    }

    pub fn feedback(&self) -> &'static str {
        match self.percentage() {
            100 => "Perfect! You're a language master!",
            p if p >= 75 => "Great job! You're learning fast!",
            p if p >= 50 => "Good effort! Keep practicing!",
            _ => "You're just getting started! Don't give up!",
        }
    }
}
