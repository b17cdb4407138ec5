mod rate_limit;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use lagoon_agents::BanterAgent;
use lagoon_annotate::LexiconAnnotator;
use lagoon_core::RandomChoice;
use lagoon_observability::AppMetrics;
use lagoon_storage::Store;
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::rate_limit::IpRateLimiter;

#[derive(Clone)]
#[allow(private_interfaces)]
pub struct ApiState {
    pub agent: Arc<BanterAgent<Store>>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: String,
    pub limiter: IpRateLimiter,
}

pub async fn build_app() -> Result<Router> {
    let metrics = AppMetrics::shared();

    let store = if let Ok(database_url) = env::var("LAGOON_DATABASE_URL") {
        Store::sqlite(&database_url).await?
    } else {
        Store::memory()
    };

    let agent = Arc::new(BanterAgent::new(
        Arc::new(LexiconAnnotator),
        Arc::new(RandomChoice),
        Arc::new(store),
        metrics.clone(),
    ));

    let api_key = env::var("LAGOON_API_KEY").unwrap_or_else(|_| "dev-lagoon-key".to_string());

    let state = ApiState {
        agent,
        metrics,
        api_key,
        limiter: IpRateLimiter::new(Duration::from_secs(60), 120),
    };

    Ok(Router::new()
        .route("/health", get(health))
        .route("/v1/respond", post(respond))
        .route("/v1/booking/start", post(booking_start))
        .route("/v1/booking/reply", post(booking_reply))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: lagoon_observability::MetricsSnapshot,
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

#[derive(Debug, Deserialize)]
struct RespondRequest {
    text: String,
}

#[derive(Debug, Serialize)]
struct RespondResponse {
    reply_text: String,
}

async fn respond(State(state): State<ApiState>, Json(request): Json<RespondRequest>) -> Response {
    match state.agent.respond(&request.text) {
        Ok(reply_text) => (StatusCode::OK, Json(RespondResponse { reply_text })).into_response(),
        Err(error) => {
            tracing::error!(%error, "respond failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "respond_failed",
                    "message": "could not annotate the utterance"
                })),
            )
                .into_response()
        }
    }
}

async fn booking_start(State(state): State<ApiState>) -> Response {
    match state.agent.begin_booking().await {
        Ok(exchange) => (StatusCode::OK, Json(exchange)).into_response(),
        Err(error) => {
            tracing::error!(%error, "booking start failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "booking_start_failed" })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct BookingReplyRequest {
    booking_id: String,
    text: String,
}

async fn booking_reply(
    State(state): State<ApiState>,
    Json(request): Json<BookingReplyRequest>,
) -> Response {
    match state
        .agent
        .booking_reply(&request.booking_id, &request.text)
        .await
    {
        Ok(exchange) => (StatusCode::OK, Json(exchange)).into_response(),
        Err(error) => {
            tracing::warn!(%error, booking_id = %request.booking_id, "booking reply failed");
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": "unknown_booking",
                    "message": "no active booking with that id"
                })),
            )
                .into_response()
        }
    }
}

fn is_public_endpoint(path: &str) -> bool {
    path == "/health"
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != state.api_key {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "unauthorized",
                "message": "missing or invalid x-api-key"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if !state.limiter.allow(&ip) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn request_ip(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| "local".to_string())
}
