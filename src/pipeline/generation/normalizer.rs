use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

use super::ValidationError;
use crate::models::{Question, QuestionKind, Quiz};

/// Loosely-typed question as the completion service emits it. Field
/// names follow the requested wire schema, with aliases for the
/// variants models actually produce.
#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, alias = "text")]
    question: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    question_type: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default, rename = "correctAnswer", alias = "correct_answer", alias = "answer")]
    correct_answer: Option<String>,
    #[serde(default, rename = "source_pages", alias = "source_refs", alias = "sourceRefs")]
    source_refs: Option<Vec<u32>>,
}

/// Shape loosely-typed completion output into the canonical [`Quiz`].
///
/// Completion output is not guaranteed schema-exact, so the policy is
/// lenient where it can be: question ids are coerced to strings,
/// missing ids become positional, untyped questions with text default
/// to open-ended, and typeless textless entries are dropped. Structural
/// holes (no title, questions not a sequence, a question missing a
/// required field for its declared kind) are errors.
pub fn normalize_quiz(value: Value) -> Result<Quiz, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::MissingTitle)?
        .to_string();

    let raw_questions = obj
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(ValidationError::QuestionsNotSequence)?;

    let mut questions = Vec::with_capacity(raw_questions.len());
    let mut seen_ids = BTreeSet::new();

    for (index, item) in raw_questions.iter().enumerate() {
        let raw: RawQuestion = serde_json::from_value(item.clone()).map_err(|e| {
            ValidationError::MalformedQuestion {
                index,
                message: e.to_string(),
            }
        })?;

        let declared = raw.question_type.as_deref().and_then(parse_kind);
        let text = raw
            .question
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let (kind, text) = match (declared, text) {
            (Some(kind), Some(text)) => (kind, text),
            (Some(_), None) => {
                return Err(ValidationError::MissingField {
                    index,
                    field: "question",
                })
            }
            (None, Some(text)) => (QuestionKind::OpenEnded, text),
            (None, None) => {
                tracing::debug!(index, "dropping question with neither type nor text");
                continue;
            }
        };

        if kind == QuestionKind::MultipleChoice {
            let options = raw
                .options
                .as_deref()
                .filter(|o| !o.is_empty())
                .ok_or(ValidationError::MissingField {
                    index,
                    field: "options",
                })?;
            let answer = raw
                .correct_answer
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .ok_or(ValidationError::MissingField {
                    index,
                    field: "correctAnswer",
                })?;
            if !options.iter().any(|option| option == answer) {
                return Err(ValidationError::AnswerNotInOptions { index });
            }
        }

        let id = raw
            .id
            .as_ref()
            .and_then(coerce_id)
            .unwrap_or_else(|| (index + 1).to_string());
        if !seen_ids.insert(id.clone()) {
            return Err(ValidationError::DuplicateQuestionId(id));
        }

        questions.push(Question {
            id,
            text,
            kind,
            options: raw.options,
            correct_answer: raw.correct_answer,
            source_refs: raw.source_refs,
        });
    }

    let id = obj
        .get("id")
        .or_else(|| obj.get("quiz_id"))
        .and_then(coerce_id)
        .unwrap_or_else(generation_id);

    Ok(Quiz {
        id,
        title,
        questions,
    })
}

fn parse_kind(raw: &str) -> Option<QuestionKind> {
    match raw.trim().to_lowercase().as_str() {
        "short" | "mcq" | "multiple_choice" => Some(QuestionKind::MultipleChoice),
        "long" | "open" | "open_ended" => Some(QuestionKind::OpenEnded),
        _ => None,
    }
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Fresh generation id: a monotonically increasing millisecond
/// timestamp, so regenerated quizzes never reuse an id.
fn generation_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
