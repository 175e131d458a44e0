//! Page registry
//!
//! Process-wide record of every generated page, keyed by the deterministic
//! triple slug. The check-then-insert sequence runs under a single write
//! lock so two racing requests for the same triple cannot both register.

use crate::models::page::{page_slug, PageEntry};
use crate::models::{Difficulty, ModelId};
use crate::utils::error::{AppError, AppResult};
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct RegistryInner {
    /// Entries in registration order, for stable menu rendering
    entries: Vec<PageEntry>,
    /// Slug index backing `exists` lookups
    slugs: HashSet<String>,
}

/// Shared registry of generated pages
#[derive(Debug, Default)]
pub struct PageRegistry {
    inner: RwLock<RegistryInner>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a page for the normalized triple is already registered
    pub fn exists(&self, technology: &str, difficulty: Difficulty, model: ModelId) -> bool {
        let slug = page_slug(technology, difficulty, model);
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.slugs.contains(&slug)
    }

    /// Register a page for a previously-unseen triple
    ///
    /// Fails with `DuplicateEntry` if the triple is already present. The
    /// existence check and the insert share one lock acquisition.
    pub fn register(
        &self,
        technology: &str,
        difficulty: Difficulty,
        model: ModelId,
        display_name: String,
    ) -> AppResult<PageEntry> {
        let entry = PageEntry::new(technology, difficulty, model, display_name);
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());

        if inner.slugs.contains(&entry.url_path) {
            debug!("Registry already holds {}", entry.url_path);
            return Err(AppError::DuplicateEntry(entry.url_path));
        }

        inner.slugs.insert(entry.url_path.clone());
        inner.entries.push(entry.clone());
        info!("Registered page {}", entry.url_path);
        Ok(entry)
    }

    /// Remove an entry by slug, returning whether it was present
    ///
    /// Rollback hook for the coordinator; not part of the public surface.
    pub(crate) fn remove(&self, url_path: &str) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if inner.slugs.remove(url_path) {
            inner.entries.retain(|entry| entry.url_path != url_path);
            debug!("Removed page {}", url_path);
            true
        } else {
            false
        }
    }

    /// All registered pages, in registration order
    pub fn all(&self) -> Vec<PageEntry> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.entries.clone()
    }

    /// Number of registered pages
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
