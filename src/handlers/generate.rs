//! Generation endpoint handler
//!
//! Accepts a (technology, difficulty, model) request, resolves the caller's
//! session and hands the work to the coordinator

use crate::handlers::AppState;
use crate::models::{Difficulty, ModelId, PageEntry};
use crate::services::DEFAULT_SESSION;
use crate::utils::error::{AppError, AppResult};
use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Header carrying the caller's session identity
pub const SESSION_HEADER: &str = "x-session-id";

/// Generation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Technology the caller wants to learn
    pub technology: String,
    /// Difficulty level ("Beginner" / "Intermediate" / "Expert")
    pub difficulty: String,
    /// Model identifier ("gpt-3.5" / "gpt-4")
    pub model: String,
}

/// Generation response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Registered page metadata
    pub page: PageEntry,
    /// Sanitized markdown material
    pub content: String,
}

/// Handle a generation request
///
/// POST /v1/generate
pub async fn handle_generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let session_id = session_id_from_headers(&headers);
    debug!(
        "Received generation request: technology={}, difficulty={}, model={}, session={}",
        request.technology, request.difficulty, request.model, session_id
    );

    let model: ModelId = request
        .model
        .parse()
        .map_err(AppError::UnknownModel)?;
    let difficulty: Difficulty = request
        .difficulty
        .parse()
        .map_err(|d| AppError::Validation(format!("Unknown difficulty level: {}", d)))?;

    // Hold the session for the whole request so its ledger and counter see
    // one request at a time
    let session = state.sessions.session(&session_id);
    let mut session_state = session.lock().await;

    let generated = state
        .coordinator
        .handle_generate(&mut session_state, &request.technology, difficulty, model)
        .await?;

    Ok(Json(GenerateResponse {
        page: generated.page,
        content: generated.content,
    }))
}

/// Resolve the session id, falling back to the shared default
pub fn session_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_id_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_id_from_headers(&headers), DEFAULT_SESSION);

        headers.insert(SESSION_HEADER, HeaderValue::from_static("alpha"));
        assert_eq!(session_id_from_headers(&headers), "alpha");

        headers.insert(SESSION_HEADER, HeaderValue::from_static("   "));
        assert_eq!(session_id_from_headers(&headers), DEFAULT_SESSION);
    }

    #[test]
    fn test_request_body_parses() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"technology": "Rust", "difficulty": "Beginner", "model": "gpt-3.5"}"#,
        )
        .unwrap();
        assert_eq!(request.technology, "Rust");
        assert_eq!(request.difficulty.parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(request.model.parse::<ModelId>(), Ok(ModelId::Gpt35));
    }
}
