//! Shared types for the HTTP API layer.

use std::path::PathBuf;
use std::sync::Arc;

use crate::pipeline::generation::{CompletionClient, QuizGenerator};

/// Shared context for all API routes. Cloned per request; everything
/// inside is read-only, so requests never contend on locks.
#[derive(Clone)]
pub struct ApiContext {
    pub generator: Arc<QuizGenerator>,
    pub client: Arc<dyn CompletionClient + Send + Sync>,
    /// Root for `document_path` references in generation requests.
    pub documents_dir: PathBuf,
}

impl ApiContext {
    pub fn new(client: Arc<dyn CompletionClient + Send + Sync>, documents_dir: PathBuf) -> Self {
        Self {
            generator: Arc::new(QuizGenerator::new(client.clone())),
            client,
            documents_dir,
        }
    }
}
