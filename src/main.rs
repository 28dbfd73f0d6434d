use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use quizforge::api::router::api_router;
use quizforge::api::types::ApiContext;
use quizforge::config;
use quizforge::pipeline::generation::ChatCompletionsClient;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // The completion client is blocking (handlers run it under
    // spawn_blocking), so it is built before the runtime starts.
    let client = Arc::new(ChatCompletionsClient::from_env());
    let ctx = ApiContext::new(client, config::documents_dir());

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "cannot start async runtime");
            return;
        }
    };

    runtime.block_on(serve(ctx));
}

async fn serve(ctx: ApiContext) {
    let app = api_router(ctx);

    let port: u16 = std::env::var("QUIZFORGE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8600);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "cannot bind API address");
            return;
        }
    };
    tracing::info!(%addr, "quiz API listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
    }
}
