//! # forecast-server
//!
//! REST API server for synthetic water-heater temperature forecasts.
//! Serves `GET /forecast` plus health probes over a shared, injected oracle.

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use forecast_facade::{default_oracle, ForecastPipeline};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;

use config::ServerConfig;
use routes::AppState;

fn cors_layer(origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);
    Ok(match origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS_ORIGIN '{}'", origin))?,
        ),
        None => cors.allow_origin(Any),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let defaults = config.service_config()?;

    // One oracle for the lifetime of the process, shared read-only
    let pipeline = ForecastPipeline::new(default_oracle());
    tracing::info!(
        preset = %config.preset,
        oracle = pipeline.oracle().name(),
        intervals = defaults.generation.interval_count,
        context = defaults.plan.context_length,
        display = defaults.plan.display_length,
        prediction = defaults.plan.prediction_length,
        "Forecast defaults loaded"
    );

    let app = routes::router(AppState::new(pipeline, defaults))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origin.as_deref())?);

    let addr = config.addr()?;
    tracing::info!("forecast-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
