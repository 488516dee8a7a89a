//! Platform speech capabilities.
//!
//! Speech-to-text and synthesis are provided by the host platform. The core
//! only needs a transcript, so it talks to them through this trait.

use crate::error::Result;
use crate::pronunciation::{evaluate, PronunciationFeedback};
use crate::types::Language;

/// Speech recognition and synthesis for a locale such as `"es"`.
pub trait SpeechCapability {
    /// Listen for a single utterance and return its transcript.
    fn transcribe(&mut self, locale: &str) -> Result<String>;

    /// Read `text` aloud.
    fn speak(&mut self, text: &str, locale: &str) -> Result<()>;
}

/// Listen to the learner saying `expected` and score the attempt.
pub fn practice<S>(speech: &mut S, expected: &str, language: Language) -> Result<PronunciationFeedback>
where
    S: SpeechCapability + ?Sized,
{
    let transcript = speech.transcribe(language.code())?;
    Ok(evaluate(expected, &transcript))
}
