use serde::{Deserialize, Serialize};

/// What kind of response a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    OpenEnded,
}

/// A single testable item within a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique within the owning quiz; never reused across regeneration.
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    /// Answer choices. Non-empty for multiple choice questions; the
    /// parser's fallback question also carries placeholder options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Canonical correct response. Absent for ungraded open-ended items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    /// Originating pages/sections, for traceability; never affects grading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_refs: Option<Vec<u32>>,
}

/// A generated quiz. Immutable once produced: regeneration creates a
/// new quiz with a new id rather than mutating an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    /// Display and answer-mapping order, preserved end-to-end.
    pub questions: Vec<Question>,
}
