//! Page listing and usage endpoints
//!
//! Exposes the registered pages (menu data) and the caller's remaining
//! per-model quota

use crate::handlers::generate::session_id_from_headers;
use crate::handlers::AppState;
use crate::models::PageEntry;
use axum::{extract::State, http::HeaderMap, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Page listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct PagesResponse {
    /// Registered pages in registration order
    pub pages: Vec<PageEntry>,
    /// (url, label) pairs for menu rendering, same order
    pub menu: Vec<(String, String)>,
}

/// List registered pages
///
/// GET /v1/pages
pub async fn list_pages(State(state): State<Arc<AppState>>) -> Json<PagesResponse> {
    debug!("Listing registered pages");

    let pages = state.coordinator.registry().all();
    let menu = pages.iter().map(PageEntry::as_menu_item).collect();

    Json(PagesResponse { pages, menu })
}

/// One model's remaining quota for the caller's session
#[derive(Debug, Serialize, Deserialize)]
pub struct UsageEntry {
    /// Model identifier
    pub model: String,
    /// Free generations left
    pub usages_remaining: u32,
    /// Rendered selector label
    pub label: String,
}

/// Session usage response
#[derive(Debug, Serialize, Deserialize)]
pub struct UsageResponse {
    /// Session this usage belongs to
    pub session: String,
    /// Requests issued so far this session
    pub n_requests: u32,
    /// Per-model remaining quota, in menu order
    pub models: Vec<UsageEntry>,
}

/// Report the caller's remaining per-model quota
///
/// GET /v1/usage
pub async fn session_usage(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<UsageResponse> {
    let session_id = session_id_from_headers(&headers);
    debug!("Reporting usage for session {}", session_id);

    let session = state.sessions.session(&session_id);
    let session_state = session.lock().await;

    let models = session_state
        .ledger
        .snapshot()
        .into_iter()
        .map(|usage| UsageEntry {
            model: usage.model.short_name().to_string(),
            usages_remaining: usage.usages_remaining,
            label: usage.render(),
        })
        .collect();

    Json(UsageResponse {
        session: session_id,
        n_requests: session_state.n_requests,
        models,
    })
}
