mod extract;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use roxinho_core::AppConfig;
use roxinho_scraper::ProductExtractor;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{request_id, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<ProductExtractor>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

/// Any origin outside production; only the storefront frontend in production.
fn build_cors(config: &AppConfig) -> CorsLayer {
    let origin = if config.is_production() {
        match HeaderValue::from_str(&config.frontend_url) {
            Ok(origin) => AllowOrigin::list([origin]),
            Err(e) => {
                tracing::error!(
                    frontend_url = %config.frontend_url,
                    error = %e,
                    "invalid frontend URL; rejecting all cross-origin requests"
                );
                AllowOrigin::list(std::iter::empty::<HeaderValue>())
            }
        }
    } else {
        AllowOrigin::from(Any)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/product-scraper/extract-from-url",
            post(extract::extract_from_url),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(config))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthData {
            status: "healthy",
            timestamp: Utc::now(),
        }),
    )
}
