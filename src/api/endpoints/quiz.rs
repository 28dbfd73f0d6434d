//! Quiz generation and grading endpoints.
//!
//! - `POST /api/quiz/generate` — document (inline bytes or stored
//!   reference) + params → quiz
//! - `POST /api/quiz/grade` — quiz + answers → grade result

use std::path::{Component, Path};

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{AnswerSet, GradeResult, Quiz};
use crate::pipeline::generation::{DocumentSource, GenerationParams};
use crate::pipeline::grading;

#[derive(Deserialize)]
pub struct GenerateRequest {
    /// Inline document bytes, base64 (a data URL prefix is accepted).
    pub document: Option<String>,
    pub filename: Option<String>,
    /// Reference to a previously stored document, relative to the
    /// documents directory.
    pub document_path: Option<String>,
    #[serde(default)]
    pub params: GenerationParams,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub quiz: Quiz,
}

/// `POST /api/quiz/generate`
pub async fn generate(
    State(ctx): State<ApiContext>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let source = resolve_source(&ctx, &req)?;
    let params = req.params;

    // The pipeline is synchronous (blocking HTTP + PDF parsing), so it
    // runs off the async worker threads.
    let generator = ctx.generator.clone();
    let quiz = tokio::task::spawn_blocking(move || generator.generate(source, &params))
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))??;

    Ok(Json(GenerateResponse { quiz }))
}

fn resolve_source(ctx: &ApiContext, req: &GenerateRequest) -> Result<DocumentSource, ApiError> {
    if let Some(encoded) = req.document.as_deref() {
        // Upload widgets send data URLs; accept bare base64 too.
        let encoded = encoded
            .rsplit_once("base64,")
            .map(|(_, data)| data)
            .unwrap_or(encoded);
        let data = BASE64
            .decode(encoded.trim())
            .map_err(|e| ApiError::BadRequest(format!("Invalid base64 document: {e}")))?;
        let filename = req
            .filename
            .clone()
            .unwrap_or_else(|| "document.pdf".to_string());
        return Ok(DocumentSource::Bytes { filename, data });
    }

    if let Some(reference) = req.document_path.as_deref() {
        let relative = Path::new(reference);
        // Stored references must stay inside the documents directory.
        if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
            return Err(ApiError::BadRequest("Invalid document path".into()));
        }
        return Ok(DocumentSource::Path(ctx.documents_dir.join(relative)));
    }

    Err(ApiError::NoDocument)
}

#[derive(Deserialize)]
pub struct GradeRequest {
    pub quiz: serde_json::Value,
    #[serde(default)]
    pub answers: AnswerSet,
}

/// `POST /api/quiz/grade`
pub async fn grade(
    State(_ctx): State<ApiContext>,
    Json(req): Json<GradeRequest>,
) -> Result<Json<GradeResult>, ApiError> {
    let quiz = grading::quiz_from_value(req.quiz)?;
    Ok(Json(grading::grade(&quiz, &req.answers)))
}
