use std::path::PathBuf;
use std::sync::Arc;

use super::completion::{CompletionClient, CompletionContext};
use super::normalizer::normalize_quiz;
use super::params::GenerationParams;
use super::parser::parse_or_fallback;
use super::prompt::{build_generation_prompt, QUIZ_SYSTEM_PROMPT};
use super::GenerationError;
use crate::models::Quiz;
use crate::pipeline::extraction::{extract_text, normalize_extracted_text, ExtractionError};

/// Where the source document comes from.
pub enum DocumentSource {
    /// Raw uploaded bytes.
    Bytes { filename: String, data: Vec<u8> },
    /// A previously stored document on disk.
    Path(PathBuf),
}

/// Runs the full generation pipeline:
/// extract → prompt → complete → parse → normalize.
///
/// Each call is independent and stateless; the produced quiz is a
/// fresh value owned by the caller, so concurrent generations need no
/// locking.
pub struct QuizGenerator {
    client: Arc<dyn CompletionClient + Send + Sync>,
}

impl QuizGenerator {
    pub fn new(client: Arc<dyn CompletionClient + Send + Sync>) -> Self {
        Self { client }
    }

    /// Generate a quiz from a document source.
    ///
    /// The document bytes ride along as completion context so a
    /// document-native service sees the layout the extractor discarded;
    /// the extracted text still bounds the prompt itself.
    pub fn generate(
        &self,
        source: DocumentSource,
        params: &GenerationParams,
    ) -> Result<Quiz, GenerationError> {
        params.validate()?;

        let (filename, data) = match source {
            DocumentSource::Bytes { filename, data } => (filename, data),
            DocumentSource::Path(path) => {
                if !path.exists() {
                    return Err(GenerationError::DocumentNotFound(path));
                }
                let data = std::fs::read(&path).map_err(ExtractionError::Io)?;
                let filename = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("document.pdf")
                    .to_string();
                (filename, data)
            }
        };

        let text = extract_text(&data)?;
        let prompt = build_generation_prompt(&text, params)?;

        tracing::info!(
            filename = %filename,
            chars = text.len(),
            count = params.question_count,
            "requesting quiz generation"
        );

        let raw = self.client.complete(
            QUIZ_SYSTEM_PROMPT,
            &prompt,
            &CompletionContext::Document {
                filename: &filename,
                bytes: &data,
            },
        )?;

        self.finish(&raw)
    }

    /// Generate from pre-extracted plain text. The bounded text itself
    /// serves as the completion context.
    pub fn generate_from_text(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Quiz, GenerationError> {
        params.validate()?;

        let text = normalize_extracted_text(text);
        if text.is_empty() {
            return Err(ExtractionError::EmptyDocument.into());
        }

        let prompt = build_generation_prompt(&text, params)?;
        let raw = self
            .client
            .complete(QUIZ_SYSTEM_PROMPT, &prompt, &CompletionContext::Text(&text))?;

        self.finish(&raw)
    }

    fn finish(&self, raw: &str) -> Result<Quiz, GenerationError> {
        let parsed = parse_or_fallback(raw);
        if parsed.is_fallback() {
            tracing::warn!("quiz generation degraded to a single fallback question");
        }

        let quiz = normalize_quiz(parsed.into_value())?;
        tracing::info!(quiz_id = %quiz.id, questions = quiz.questions.len(), "quiz generated");
        Ok(quiz)
    }
}
