use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from question id to the user's submitted answer text:
/// a selected option for multiple choice, free text for open-ended.
/// Owned and mutated by the caller; grading never modifies it.
/// Ordered map so serialized results are deterministic.
pub type AnswerSet = BTreeMap<String, String>;

/// Outcome of grading one [`AnswerSet`] against a quiz. Derived and
/// stateless: recomputable from the same inputs at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Count of correct answers, `0 <= score <= total`.
    pub score: usize,
    /// Question count at grading time.
    pub total: usize,
    /// Question id → canonical correct answer, for review display.
    pub correct_by_question: BTreeMap<String, String>,
    /// Qualitative feedback banded on score/total.
    pub message: String,
}
