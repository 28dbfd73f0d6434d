//! Placeholder chat pass-through.
//!
//! No retrieval happens here: the caller supplies whatever context
//! chunks it already has, and the same opaque completion service
//! answers directly over them.

use thiserror::Error;

use super::generation::{CompletionClient, CompletionContext, CompletionError};

pub const CHAT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant answering questions based on the provided context.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("No query provided")]
    EmptyQuery,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Build the pass-through prompt: context chunks joined, then the query.
pub fn build_chat_prompt(query: &str, context: &[String]) -> String {
    let context = context.join("\n");
    format!(
        "Answer the following question based on the context provided. \
         If the context doesn't contain enough information, say so.\n\n\
         Context: {context}\n\nQuestion: {query}"
    )
}

/// Answer a query over caller-supplied context chunks.
pub fn answer(
    client: &dyn CompletionClient,
    query: &str,
    context: &[String],
) -> Result<String, ChatError> {
    if query.trim().is_empty() {
        return Err(ChatError::EmptyQuery);
    }

    let prompt = build_chat_prompt(query.trim(), context);
    tracing::debug!(chunks = context.len(), "chat pass-through request");
    Ok(client.complete(CHAT_SYSTEM_PROMPT, &prompt, &CompletionContext::None)?)
}
