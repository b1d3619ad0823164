//! Study mentor API server binary.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use study_mentor::adapters::ai::{GroqConfig, GroqProvider};
use study_mentor::adapters::http::{api_router, SessionAppState};
use study_mentor::adapters::postgres::PostgresGradeStore;
use study_mentor::application::FlowController;
use study_mentor::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    // A failed connection leaves the store disabled rather than taking
    // the process down; onboarding still works once the store recovers.
    let store = PostgresGradeStore::connect(&config.database).await;
    if store.is_connected() {
        info!("connected to grade store");
        if config.database.run_migrations {
            store
                .run_migrations()
                .await
                .map_err(|e| format!("migrations failed: {}", e))?;
            info!("migrations applied");
        }
    } else {
        warn!("grade store unavailable, running degraded");
    }

    let api_key = config
        .ai
        .groq_api_key
        .clone()
        .ok_or("GROQ_API_KEY is not configured")?;
    let groq_config = GroqConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());
    let provider = GroqProvider::new(groq_config)?;

    let flow = Arc::new(FlowController::new(Arc::new(store), Arc::new(provider)));
    let app = api_router(SessionAppState::new(flow));

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => error!(error = %e, "failed to listen for shutdown signal"),
    }
}
