//! Generation coordinator
//!
//! Orchestrates one "generate learning material" request end to end:
//! validates the input, consults the session ledger and the shared page
//! registry, performs the remote call through the injected client, and
//! applies the ledger/registry updates as a pair.

use crate::models::page::page_slug;
use crate::models::{Difficulty, ModelId, PageEntry};
use crate::services::client::GenerateClient;
use crate::services::registry::PageRegistry;
use crate::services::session::SessionState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::text::{capitalize_each_word, sanitize_material};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a successful generation request
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    /// Registry entry created for the triple
    pub page: PageEntry,
    /// Sanitized markdown material
    pub content: String,
}

/// Per-request decision flow around the ledger, registry and remote client
pub struct GenerationCoordinator {
    registry: Arc<PageRegistry>,
    client: Arc<dyn GenerateClient>,
    /// Total requests a session may issue before being told to slow down
    request_limit: u32,
}

impl GenerationCoordinator {
    pub fn new(
        registry: Arc<PageRegistry>,
        client: Arc<dyn GenerateClient>,
        request_limit: u32,
    ) -> Self {
        Self {
            registry,
            client,
            request_limit,
        }
    }

    /// Shared registry of generated pages
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Handle one generation request for the given session
    ///
    /// Rejections leave both the ledger and the registry untouched. On
    /// success the quota decrement and the page registration land together;
    /// if either half fails the other is rolled back.
    pub async fn handle_generate(
        &self,
        session: &mut SessionState,
        technology: &str,
        difficulty: Difficulty,
        model: ModelId,
    ) -> AppResult<GeneratedPage> {
        // Session-wide ceiling, checked before anything else. Hitting it
        // resets the counter to 1, not 0, matching the shipped behavior
        // (see DESIGN.md) so the next request goes through.
        if session.n_requests >= self.request_limit {
            warn!("Session request limit reached: {}", session.n_requests);
            session.n_requests = 1;
            return Err(AppError::TooManyRequests);
        }

        let technology = technology.trim();
        if technology.is_empty() {
            return Err(AppError::EmptyTechnology);
        }

        if !session.ledger.has_quota(model) {
            return Err(AppError::QuotaExhausted(model.display_name().to_string()));
        }

        if self.registry.exists(technology, difficulty, model) {
            return Err(AppError::DuplicatePage(page_slug(technology, difficulty, model)));
        }

        // The request counts as issued once it reaches the remote call
        session.n_requests += 1;

        let raw = self.client.generate(technology, model).await?;
        let content = sanitize_material(&raw);

        // Registration is the authority on uniqueness: a racer that slipped
        // past the advisory `exists` check loses here, before any quota is
        // consumed.
        let display_name = capitalize_each_word(technology);
        let page = match self.registry.register(technology, difficulty, model, display_name) {
            Ok(page) => page,
            Err(AppError::DuplicateEntry(slug)) => {
                return Err(AppError::DuplicatePage(slug));
            }
            Err(e) => return Err(e),
        };

        // Quota precondition was checked above and the session is held
        // exclusively, so this only fails if that reasoning breaks; roll the
        // registration back rather than leave the pair half-applied.
        if let Err(e) = session.ledger.decrement(model, 1) {
            self.registry.remove(&page.url_path);
            return Err(e);
        }

        info!(
            "Generated page {} for technology {} ({} uses of {} left)",
            page.url_path,
            page.technology,
            session.ledger.usages_remaining(model),
            model
        );

        Ok(GeneratedPage { page, content })
    }
}
