use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "QuizForge";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the application data directory (~/QuizForge)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("QuizForge")
}

/// Directory for stored source documents, referenced by
/// `document_path` in generation requests.
pub fn documents_dir() -> PathBuf {
    app_data_dir().join("documents")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Base URL of the OpenAI-compatible completion service.
pub fn completion_base_url() -> String {
    std::env::var("QUIZFORGE_COMPLETION_URL")
        .unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
}

/// API key for the completion service, when the deployment needs one.
pub fn completion_api_key() -> Option<String> {
    std::env::var("QUIZFORGE_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
}

/// Model identifier requested from the completion service.
pub fn completion_model() -> String {
    std::env::var("QUIZFORGE_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string())
}

/// Completion request timeout (seconds).
pub fn completion_timeout_secs() -> u64 {
    std::env::var("QUIZFORGE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}
