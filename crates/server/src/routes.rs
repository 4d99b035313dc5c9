//! API route handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use forecast_facade::{ForecastError, ForecastOverrides, ForecastPipeline, ForecastResponse, ServiceConfig};
use serde::Serialize;
use thiserror::Error;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<ForecastPipeline>,
    defaults: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(pipeline: ForecastPipeline, defaults: ServiceConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            defaults: Arc::new(defaults),
        }
    }
}

/// Routes without middleware; `main` adds tracing and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        // Legacy health endpoint
        .route("/health", get(liveness))
        // API endpoints
        .route("/forecast", get(forecast))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Forecast worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forecast(ForecastError::Configuration { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Forecast(ForecastError::OracleFailure(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Forecast(ForecastError::GenerationInvariant(_)) | ApiError::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Forecast request failed");
        } else {
            tracing::warn!(error = %self, "Forecast request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// `GET /forecast`: preset defaults plus query overrides.
pub async fn forecast(
    State(state): State<AppState>,
    Query(overrides): Query<ForecastOverrides>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let config = state.defaults.apply(&overrides)?;
    let pipeline = Arc::clone(&state.pipeline);

    let response = tokio::task::spawn_blocking(move || {
        pipeline.run(&config.generation, &config.plan)
    })
    .await??;

    tracing::info!(
        oracle = state.pipeline.oracle().name(),
        actual = response.actual.len(),
        rows = response.forecast.len(),
        horizon = response.horizon().unwrap_or(0),
        overridden = !overrides.is_empty(),
        "Forecast served"
    );
    Ok(Json(response))
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the oracle answer a one-step forecast?
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let oracle = state.pipeline.oracle();
    let quantile = oracle
        .supported_quantiles()
        .and_then(|qs| qs.first().copied())
        .unwrap_or(0.5);
    let probe = [state.defaults.generation.base_temperature; 8];

    match oracle.predict(&probe, 1, &[quantile]) {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "oracle": oracle.name(),
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => {
            tracing::warn!(oracle = oracle.name(), error = %e, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "degraded",
                    "oracle": oracle.name(),
                    "error": e.to_string(),
                    "version": env!("CARGO_PKG_VERSION")
                })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use forecast_facade::{default_oracle, ForecastResult, Preset, QuantileOracle, Result};
    use tower::ServiceExt;

    struct Offline;

    impl QuantileOracle for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        fn predict(&self, _: &[f64], _: usize, _: &[f64]) -> Result<ForecastResult> {
            Err(ForecastError::oracle("model not loaded"))
        }
    }

    fn app(preset: Preset) -> Router {
        let state = AppState::new(
            ForecastPipeline::new(default_oracle()),
            ServiceConfig::preset(preset),
        );
        router(state)
    }

    fn offline_app() -> Router {
        let state = AppState::new(
            ForecastPipeline::new(Arc::new(Offline)),
            ServiceConfig::default(),
        );
        router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_forecast_default_shape() {
        let (status, body) = get_json(app(Preset::Weekly), "/forecast").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timestamps"].as_array().unwrap().len(), 48);
        assert_eq!(body["actual"].as_array().unwrap().len(), 48);
        assert_eq!(body["forecast"].as_array().unwrap().len(), 1);
        assert_eq!(body["forecast"][0].as_array().unwrap().len(), 24);
    }

    #[tokio::test]
    async fn test_forecast_query_overrides() {
        let (status, body) = get_json(
            app(Preset::Compact),
            "/forecast?display=12&prediction=6&quantiles=0.9,0.1&seed=3",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["actual"].as_array().unwrap().len(), 12);
        assert_eq!(body["forecast"].as_array().unwrap().len(), 2);
        let upper = body["forecast"][0][0].as_f64().unwrap();
        let lower = body["forecast"][1][0].as_f64().unwrap();
        assert!(upper >= lower);
    }

    #[tokio::test]
    async fn test_overlong_context_is_bad_request() {
        let (status, body) = get_json(app(Preset::Weekly), "/forecast?context=1000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("context_length"));
    }

    #[tokio::test]
    async fn test_oversized_lengths_are_bad_request() {
        for uri in [
            "/forecast?prediction=1099511627776",
            "/forecast?intervals=1099511627776&context=48",
        ] {
            let (status, body) = get_json(app(Preset::Weekly), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(body["error"].as_str().unwrap().contains("exceeds the limit"));
        }
    }

    #[tokio::test]
    async fn test_unsupported_quantile_is_bad_request() {
        let (status, _) = get_json(app(Preset::Weekly), "/forecast?quantiles=0.25").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oracle_failure_is_bad_gateway() {
        let (status, body) = get_json(offline_app(), "/forecast").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Oracle failure: model not loaded");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        for uri in ["/health", "/health/live"] {
            let (status, body) = get_json(app(Preset::Weekly), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "alive");
        }
        let (status, body) = get_json(app(Preset::Weekly), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["oracle"], "naive_persistence");
    }

    #[tokio::test]
    async fn test_readiness_degraded_when_oracle_fails() {
        let (status, body) = get_json(offline_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
    }
}
