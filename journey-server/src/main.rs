mod config;
mod rpc;
mod service;
mod tools;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use journey_flow::JourneyBuilder;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LogFormat};
use crate::service::{AppState, build_router};

/// Initialize tracing in the requested output format
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "journey_server=debug,journey_flow=debug,tower_http=debug".into());

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_format);

    let journey = JourneyBuilder::hospitalization()
        .default_language(config.default_language)
        .build();
    let app = build_router(AppState::new(Arc::new(journey)));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!(
        bind = %config.bind,
        default_language = %config.default_language,
        "Server running"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
