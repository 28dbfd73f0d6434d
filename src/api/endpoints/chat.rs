//! Chat pass-through endpoint.
//!
//! `POST /api/chat/send` — answer a question over caller-supplied
//! context chunks via the completion service. No retrieval, no
//! conversation state.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::chat;

#[derive(Deserialize)]
pub struct ChatSendRequest {
    pub message: String,
    /// Context chunks the caller already retrieved, if any.
    #[serde(default)]
    pub context: Vec<String>,
}

#[derive(Serialize)]
pub struct ChatSendResponse {
    pub answer: String,
}

/// `POST /api/chat/send`
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    if req.message.len() > 2000 {
        return Err(ApiError::BadRequest("Message too long (max 2000 chars)".into()));
    }

    let client = ctx.client.clone();
    let answer =
        tokio::task::spawn_blocking(move || chat::answer(client.as_ref(), &req.message, &req.context))
            .await
            .map_err(|e| ApiError::Internal(format!("chat task failed: {e}")))??;

    Ok(Json(ChatSendResponse { answer }))
}
