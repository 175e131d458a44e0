//! Generated page metadata
//!
//! A page is identified by its (technology, difficulty, model) triple,
//! encoded deterministically into a url slug

use crate::models::{Difficulty, ModelId};
use crate::utils::text::normalize_technology;
use serde::{Deserialize, Serialize};

/// Build the deterministic url path for a triple
///
/// Same triple always yields the same slug, so regeneration attempts can be
/// recognized by a plain key lookup.
pub fn page_slug(technology: &str, difficulty: Difficulty, model: ModelId) -> String {
    format!(
        "learn_{}_{}_{}",
        normalize_technology(technology),
        difficulty.as_slug(),
        model.short_name()
    )
}

/// Metadata for one generated learning material page
///
/// Created exactly once per unseen triple and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEntry {
    /// Unique url path, derived from the triple
    pub url_path: String,
    /// Name shown in the navigation menu
    pub display_name: String,
    /// Normalized technology name
    pub technology: String,
    /// Requested difficulty level
    pub difficulty: Difficulty,
    /// Model that generated the page
    pub model: ModelId,
    /// Registration timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PageEntry {
    /// Construct an entry for a triple, normalizing the technology
    pub fn new(technology: &str, difficulty: Difficulty, model: ModelId, display_name: String) -> Self {
        Self {
            url_path: page_slug(technology, difficulty, model),
            display_name,
            technology: normalize_technology(technology),
            difficulty,
            model,
            created_at: chrono::Utc::now(),
        }
    }

    /// Whether this entry covers the given triple
    pub fn matches(&self, technology: &str, difficulty: Difficulty, model: ModelId) -> bool {
        self.technology == normalize_technology(technology)
            && self.difficulty == difficulty
            && self.model == model
    }

    /// Menu entry as a (url, label) pair
    pub fn as_menu_item(&self) -> (String, String) {
        (self.url_path.clone(), self.display_name.clone())
    }
}
