use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::CompletionError;

/// Context attached alongside the prompt so the completion service can
/// see the source material.
#[derive(Clone, Copy)]
pub enum CompletionContext<'a> {
    /// Inline document bytes. Document-native completion services get
    /// the raw bytes, not re-derived text, so the model can use layout
    /// the extractor discarded.
    Document { filename: &'a str, bytes: &'a [u8] },
    /// Pre-extracted plain text.
    Text(&'a str),
    /// No additional context beyond the prompt itself.
    None,
}

/// Opaque text-completion capability (allows mocking).
///
/// One request, one response: any transport failure or non-success
/// status is a `CompletionError`. The returned text is untyped: no
/// assumption that it is valid JSON.
pub trait CompletionClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        context: &CompletionContext<'_>,
    ) -> Result<String, CompletionError>;
}

/// HTTP client for an OpenAI-compatible chat completions service.
pub struct ChatCompletionsClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl ChatCompletionsClient {
    pub fn new(base_url: &str, api_key: Option<String>, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client configured from the environment (see `config`).
    pub fn from_env() -> Self {
        Self::new(
            &crate::config::completion_base_url(),
            crate::config::completion_api_key(),
            &crate::config::completion_model(),
            crate::config::completion_timeout_secs(),
        )
    }
}

/// Request body for POST /chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: MessageContent<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    File { file: FilePart<'a> },
}

#[derive(Serialize)]
struct FilePart<'a> {
    filename: &'a str,
    file_data: String,
}

/// Response body from POST /chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

fn user_message<'a>(user: &'a str, context: &CompletionContext<'a>) -> ChatMessage<'a> {
    let content = match *context {
        CompletionContext::Document { filename, bytes } => {
            let file_data = format!("data:application/pdf;base64,{}", BASE64.encode(bytes));
            MessageContent::Parts(vec![
                ContentPart::Text { text: user },
                ContentPart::File {
                    file: FilePart {
                        filename,
                        file_data,
                    },
                },
            ])
        }
        CompletionContext::Text(text) => MessageContent::Parts(vec![
            ContentPart::Text { text: user },
            ContentPart::Text { text },
        ]),
        CompletionContext::None => MessageContent::Text(user),
    };

    ChatMessage {
        role: "user",
        content,
    }
}

impl CompletionClient for ChatCompletionsClient {
    fn complete(
        &self,
        system: &str,
        user: &str,
        context: &CompletionContext<'_>,
    ) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(system),
                },
                user_message(user, context),
            ],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(|e| {
            if e.is_connect() {
                CompletionError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                CompletionError::Http(format!("Request timed out after {}s", self.timeout_secs))
            } else {
                CompletionError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CompletionError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| CompletionError::ResponseDecode(e.to_string()))?;

        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::ResponseDecode("response contained no choices".into()))?;

        Ok(first.message.content)
    }
}

/// Mock completion client for testing — returns a configured response.
pub struct MockCompletionClient {
    response: String,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(
        &self,
        _system: &str,
        _user: &str,
        _context: &CompletionContext<'_>,
    ) -> Result<String, CompletionError> {
        Ok(self.response.clone())
    }
}
