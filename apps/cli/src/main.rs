mod config;
mod errors;
mod extract;
mod latex;
mod llm_client;
mod pipeline;
mod prompt;
mod render;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tailor v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(config.gemini_api_key.clone());

    // Every failure has already been reported at the gate where it occurred;
    // the summary line here is the last console output. The process exits 0
    // either way: failures are console text, not exit codes.
    if let Err(e) = pipeline::run(&config, &llm).await {
        error!("{e}");
    }
}
