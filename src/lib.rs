//! Learning Material Generation Library
//!
//! Per-session generation quotas, page deduplication and the coordinator
//! that drives remote LLM-backed generation calls

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with_client, AppState};
pub use models::{Difficulty, ModelId, ModelUsage, PageEntry};
pub use services::{
    GenerateClient, GeneratedPage, GenerationCoordinator, LambdaClient, PageRegistry,
    SessionManager, SessionState,
};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
