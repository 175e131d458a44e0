//! Data models module
//!
//! Defines the generation model and difficulty enumerations plus
//! the per-model usage record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod page;

pub use page::PageEntry;

/// Supported generation models
///
/// Closed set, fixed at process start. Adding a model means adding a
/// variant here and a quota field in the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    /// GPT-3.5 tier
    #[serde(rename = "gpt-3.5")]
    Gpt35,
    /// GPT-4 tier
    #[serde(rename = "gpt-4")]
    Gpt4,
}

impl ModelId {
    /// All known models, in menu order
    pub const ALL: [ModelId; 2] = [ModelId::Gpt35, ModelId::Gpt4];

    /// Short name used in page slugs
    pub fn short_name(&self) -> &'static str {
        match self {
            ModelId::Gpt35 => "gpt3.5",
            ModelId::Gpt4 => "gpt4",
        }
    }

    /// Human-readable name shown in the usage selector
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelId::Gpt35 => "GPT-3.5",
            ModelId::Gpt4 => "GPT-4",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ModelId {
    type Err = String;

    /// Accepts the slug form, the display form, and the variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpt-3.5" | "gpt3.5" | "gpt_3_5" => Ok(ModelId::Gpt35),
            "gpt-4" | "gpt4" | "gpt_4" => Ok(ModelId::Gpt4),
            other => Err(other.to_string()),
        }
    }
}

/// Difficulty level of the requested learning material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    /// Lowercase form used in page slugs
    pub fn as_slug(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => f.write_str("Beginner"),
            Difficulty::Intermediate => f.write_str("Intermediate"),
            Difficulty::Expert => f.write_str("Expert"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "expert" => Ok(Difficulty::Expert),
            other => Err(other.to_string()),
        }
    }
}

/// Remaining free generations for one model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelUsage {
    /// Which model this record tracks
    pub model: ModelId,
    /// Free generations left for this model
    pub usages_remaining: u32,
}

impl ModelUsage {
    pub fn new(model: ModelId, usages_remaining: u32) -> Self {
        Self { model, usages_remaining }
    }

    /// Label shown next to the model in a selection menu
    pub fn render(&self) -> String {
        format!("{} ({} free uses left)", self.model.display_name(), self.usages_remaining)
    }
}
