//! Pronunciation feedback.
//!
//! The transcript of what the learner said is aligned against the expected
//! translation character by character (longest common subsequence), and the
//! share of expected characters that were matched decides the verdict.

use serde::{Deserialize, Serialize};

/// How a run of characters relates the expected text to the observed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Present in both.
    Matched,
    /// Present only in the observed text (extra sounds).
    Inserted,
    /// Present only in the expected text (missed sounds).
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Ordered edit transcript from expected to observed text.
pub type Alignment = Vec<DiffSegment>;

/// Qualitative accuracy band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Exact,
    Close,
    Partial,
    Poor,
}

impl Verdict {
    /// Band for an inexact attempt with `matched` of `expected_len` characters
    /// recognised. Upper bounds are exclusive: exactly 85% is `Partial`,
    /// exactly 50% is `Poor`.
    pub fn for_attempt(matched: usize, expected_len: usize) -> Self {
        // Integer comparison keeps 17/20 from landing above 85 through float error.
        let scaled = matched * 100;
        if scaled > 85 * expected_len {
            Self::Close
        } else if scaled > 50 * expected_len {
            Self::Partial
        } else {
            Self::Poor
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Exact => "Perfect!",
            Self::Close => "So close! Pay attention to the details.",
            Self::Partial => "Good try! Let's work on the highlighted sections.",
            Self::Poor => "Not quite. The red parts need practice.",
        }
    }
}

/// Result of comparing a spoken attempt with the expected text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationFeedback {
    pub verdict: Verdict,
    /// Matched expected characters over expected length, in [0, 1].
    pub accuracy_ratio: f64,
    pub alignment: Alignment,
    /// The transcript as heard, original case kept.
    pub heard: String,
}

impl PronunciationFeedback {
    /// Segments shown over the expected text. Inserted runs are left out.
    pub fn target_view(&self) -> Vec<&DiffSegment> {
        self.alignment
            .iter()
            .filter(|s| s.kind != DiffKind::Inserted)
            .collect()
    }

    /// Runs of the expected text the learner missed.
    pub fn practice_targets(&self) -> Vec<&str> {
        self.alignment
            .iter()
            .filter(|s| s.kind == DiffKind::Deleted)
            .map(|s| s.text.as_str())
            .collect()
    }

    pub fn message(&self) -> &'static str {
        self.verdict.message()
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Align `observed` against `expected` after trimming and case folding both.
pub fn align(expected: &str, observed: &str) -> Alignment {
    let expected: Vec<char> = normalize(expected).chars().collect();
    let observed: Vec<char> = normalize(observed).chars().collect();
    lcs_alignment(&expected, &observed)
}

/// Score a spoken attempt.
pub fn evaluate(expected: &str, observed: &str) -> PronunciationFeedback {
    let normalized_expected = normalize(expected);
    let normalized_observed = normalize(observed);

    if normalized_expected == normalized_observed {
        let alignment = if normalized_expected.is_empty() {
            Vec::new()
        } else {
            vec![DiffSegment::new(DiffKind::Matched, normalized_expected)]
        };
        return PronunciationFeedback {
            verdict: Verdict::Exact,
            accuracy_ratio: 1.0,
            alignment,
            heard: observed.to_string(),
        };
    }

    let expected_chars: Vec<char> = normalized_expected.chars().collect();
    let observed_chars: Vec<char> = normalized_observed.chars().collect();
    let alignment = lcs_alignment(&expected_chars, &observed_chars);

    let matched: usize = alignment
        .iter()
        .filter(|s| s.kind == DiffKind::Matched)
        .map(|s| s.text.chars().count())
        .sum();
    let expected_len = expected_chars.len();
    let accuracy_ratio = if expected_len == 0 {
        0.0
    } else {
        matched as f64 / expected_len as f64
    };
    let verdict = Verdict::for_attempt(matched, expected_len);

    tracing::debug!(matched, expected_len, ?verdict, "evaluated pronunciation");

    PronunciationFeedback {
        verdict,
        accuracy_ratio,
        alignment,
        heard: observed.to_string(),
    }
}

/// Classic O(n·m) LCS table with backtracking. Ties prefer consuming the
/// observed side, so extra characters are reported before missing ones.
fn lcs_alignment(expected: &[char], observed: &[char]) -> Alignment {
    let n = expected.len();
    let m = observed.len();
    let width = m + 1;

    // table[i * width + j] = LCS length of expected[..i] and observed[..j]
    let mut table = vec![0usize; (n + 1) * width];
    for i in 1..=n {
        for j in 1..=m {
            table[i * width + j] = if expected[i - 1] == observed[j - 1] {
                table[(i - 1) * width + (j - 1)] + 1
            } else {
                table[(i - 1) * width + j].max(table[i * width + (j - 1)])
            };
        }
    }

    let mut steps: Vec<(DiffKind, char)> = Vec::with_capacity(n + m);
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && expected[i - 1] == observed[j - 1] {
            steps.push((DiffKind::Matched, expected[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i * width + (j - 1)] >= table[(i - 1) * width + j]) {
            steps.push((DiffKind::Inserted, observed[j - 1]));
            j -= 1;
        } else {
            steps.push((DiffKind::Deleted, expected[i - 1]));
            i -= 1;
        }
    }

    // Merge adjacent characters of the same kind into runs.
    let mut alignment: Alignment = Vec::new();
    for (kind, c) in steps.into_iter().rev() {
        match alignment.last_mut() {
            Some(last) if last.kind == kind => last.text.push(c),
            _ => alignment.push(DiffSegment::new(kind, c.to_string())),
        }
    }
    alignment
}
