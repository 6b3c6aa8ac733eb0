use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod text;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use tts::TtsService;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env().expect("Invalid configuration");

    tracing::info!("espeak TTS gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Synthesizer: {}", config.espeak_bin.display());
    tracing::info!("Temp directory: {}", config.temp_dir.display());
    match config.synth_timeout {
        Some(limit) => tracing::info!("Synthesis timeout: {:?}", limit),
        None => tracing::info!("Synthesis timeout: disabled"),
    }

    // Create TTS service
    let tts = TtsService::from_config(&config);

    // Check the synthesizer once; a missing binary is not fatal
    match tts.probe().await {
        Ok(report) if report.available => tracing::info!(
            "espeak version: {}",
            report.version.as_deref().unwrap_or("unknown")
        ),
        Ok(_) => {
            tracing::warn!("espeak is not available; synthesis requests will fail");
            tracing::warn!("Install it with: sudo apt-get install espeak");
        }
        Err(e) => tracing::warn!("Could not probe espeak: {}", e),
    }

    // Create app state
    let state = Arc::new(AppState { tts });

    // Create router
    let app = create_router(state);

    tracing::info!("Starting server on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
