pub mod grader;

pub use grader::*;

use thiserror::Error;

/// Malformed grading request. Missing answers are never an error;
/// only structurally broken quiz data is.
#[derive(Error, Debug)]
pub enum InvalidInputError {
    #[error("Quiz data is missing its questions")]
    MissingQuestions,

    #[error("Quiz questions must be a sequence")]
    QuestionsNotSequence,

    #[error("Malformed quiz data: {0}")]
    MalformedQuiz(String),
}
