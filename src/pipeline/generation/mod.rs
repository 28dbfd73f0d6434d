pub mod completion;
pub mod normalizer;
pub mod orchestrator;
pub mod params;
pub mod parser;
pub mod prompt;

pub use completion::*;
pub use normalizer::*;
pub use orchestrator::*;
pub use params::*;
pub use parser::*;
pub use prompt::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::extraction::ExtractionError;

/// Transport or service failure talking to the completion service.
/// No retry logic lives in this pipeline; retries belong to the caller.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion service unreachable at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Completion service returned error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("Malformed completion response: {0}")]
    ResponseDecode(String),
}

/// No JSON object could be recovered from raw completion text.
/// The offending text is attached for diagnostics.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No JSON object found in completion response")]
    NoJsonObject { raw: String },

    #[error("JSON decoding failed: {message}")]
    Decode { message: String, raw: String },
}

/// Structurally invalid quiz data from the completion service.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Quiz payload is not a JSON object")]
    NotAnObject,

    #[error("Quiz title is missing")]
    MissingTitle,

    #[error("Quiz questions are missing or not a sequence")]
    QuestionsNotSequence,

    #[error("Question {index} is malformed: {message}")]
    MalformedQuestion { index: usize, message: String },

    #[error("Question {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Question {index}: correct answer is not one of the options")]
    AnswerNotInOptions { index: usize },

    #[error("Duplicate question id `{0}`")]
    DuplicateQuestionId(String),
}

#[derive(Error, Debug)]
#[error("Invalid generation parameters: {0}")]
pub struct InvalidParamsError(pub String);

/// Everything that can end a generation call. Extraction and completion
/// failures are fatal and surfaced verbatim; parse failures are
/// recovered by the fallback wrapping before they reach this level.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No document provided")]
    NoDocument,

    #[error("Document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error(transparent)]
    InvalidParams(#[from] InvalidParamsError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
