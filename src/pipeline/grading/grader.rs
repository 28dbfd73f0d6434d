use std::collections::BTreeMap;

use serde_json::Value;

use super::InvalidInputError;
use crate::models::{AnswerSet, GradeResult, Quiz};

/// Decode a quiz submitted for grading, guarding the entry-point
/// contract: `questions` must be present and a sequence.
pub fn quiz_from_value(value: Value) -> Result<Quiz, InvalidInputError> {
    let questions = value
        .get("questions")
        .ok_or(InvalidInputError::MissingQuestions)?;
    if !questions.is_array() {
        return Err(InvalidInputError::QuestionsNotSequence);
    }
    serde_json::from_value(value).map_err(|e| InvalidInputError::MalformedQuiz(e.to_string()))
}

/// Exact-match grading of an answer set against a quiz.
///
/// Both sides are case-folded and whitespace-trimmed before comparison;
/// there is no partial credit and no fuzzy matching, so open-ended
/// answers only count when they match the reference verbatim. A
/// question without a canonical answer is ungradeable and always
/// scores incorrect. Pure function: the quiz and answers are never
/// mutated, and identical inputs always produce identical results.
pub fn grade(quiz: &Quiz, answers: &AnswerSet) -> GradeResult {
    let total = quiz.questions.len();
    let mut score = 0;
    let mut correct_by_question = BTreeMap::new();

    for question in &quiz.questions {
        let canonical = question.correct_answer.as_deref().unwrap_or("");
        correct_by_question.insert(question.id.clone(), canonical.to_string());

        let canonical = normalize_answer(canonical);
        if canonical.is_empty() {
            continue;
        }

        let submitted = answers
            .get(&question.id)
            .map(String::as_str)
            .unwrap_or("");
        if normalize_answer(submitted) == canonical {
            score += 1;
        }
    }

    GradeResult {
        score,
        total,
        correct_by_question,
        message: band_message(score, total).to_string(),
    }
}

/// Qualitative feedback banded on score/total.
pub fn band_message(score: usize, total: usize) -> &'static str {
    if score == total {
        "Perfect!"
    } else if score * 2 > total {
        "Good job!"
    } else {
        "Keep practicing!"
    }
}

fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}
