//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod generate;
pub mod health;
pub mod pages;

use crate::config::Settings;
use crate::services::{GenerateClient, GenerationCoordinator, LambdaClient, PageRegistry, SessionManager};
use anyhow::Result;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
pub struct AppState {
    pub settings: Settings,
    pub coordinator: GenerationCoordinator,
    pub sessions: SessionManager,
}

impl AppState {
    /// Assemble state around an injected generation client
    pub fn new(settings: Settings, client: Arc<dyn GenerateClient>) -> Self {
        let registry = Arc::new(PageRegistry::new());
        let coordinator =
            GenerationCoordinator::new(registry, client, settings.quota.session_request_limit);
        let sessions = SessionManager::new(settings.quota.clone());

        Self {
            settings,
            coordinator,
            sessions,
        }
    }
}

/// Create application router with the real HTTP generation client
pub async fn create_router(settings: Settings) -> Result<Router> {
    let client = Arc::new(LambdaClient::new(settings.generator.clone())?);
    Ok(create_router_with_client(settings, client))
}

/// Create application router around any generation client
///
/// Tests inject stub clients here.
pub fn create_router_with_client(settings: Settings, client: Arc<dyn GenerateClient>) -> Router {
    let app_state = Arc::new(AppState::new(settings, client));

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Create routes
    Router::new()
        .route("/v1/generate", post(generate::handle_generate))
        .route("/v1/pages", get(pages::list_pages))
        .route("/v1/usage", get(pages::session_usage))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .layer(axum::middleware::from_fn(
            crate::middleware::logging::request_logging_middleware,
        ))
        .with_state(app_state)
        .layer(middleware_stack)
}
