//! Model usage ledger
//!
//! Tracks remaining free generations per model for one session. The ledger
//! is seeded with every known model at construction, so lookups never miss;
//! unknown model strings are rejected earlier, at the parsing boundary.
//! No internal locking: the owning session serializes access.

use crate::config::QuotaConfig;
use crate::models::{ModelId, ModelUsage};
use crate::utils::error::{AppError, AppResult};
use std::collections::HashMap;
use tracing::debug;

/// Per-session free-generation ledger
#[derive(Debug, Clone)]
pub struct UsageLedger {
    usages: HashMap<ModelId, u32>,
}

impl UsageLedger {
    /// Seed a ledger from the configured per-model quotas
    pub fn from_quota(quota: &QuotaConfig) -> Self {
        let usages = ModelId::ALL
            .iter()
            .map(|&model| (model, quota.initial_uses(model)))
            .collect();
        Self { usages }
    }

    /// Current remaining free generations for a model
    pub fn usages_remaining(&self, model: ModelId) -> u32 {
        // Every variant is seeded at construction
        self.usages.get(&model).copied().unwrap_or(0)
    }

    /// Whether at least one free generation is left for a model
    pub fn has_quota(&self, model: ModelId) -> bool {
        self.usages_remaining(model) > 0
    }

    /// Consume `n` free generations
    ///
    /// Fails with `QuotaExhausted` if the result would go negative; the
    /// ledger is untouched on failure. Callers check `has_quota` first,
    /// so a failure here is a precondition violation worth surfacing.
    pub fn decrement(&mut self, model: ModelId, n: u32) -> AppResult<()> {
        let remaining = self.usages_remaining(model);
        if remaining < n {
            return Err(AppError::QuotaExhausted(model.display_name().to_string()));
        }
        self.usages.insert(model, remaining - n);
        debug!("Quota for {} decremented to {}", model, remaining - n);
        Ok(())
    }

    /// Restore `n` free generations, saturating at u32::MAX
    ///
    /// Rollback half of the decrement/register pair in the coordinator.
    pub fn credit(&mut self, model: ModelId, n: u32) {
        let remaining = self.usages_remaining(model);
        self.usages.insert(model, remaining.saturating_add(n));
        debug!("Quota for {} credited back to {}", model, remaining.saturating_add(n));
    }

    /// Snapshot of every model's remaining quota, in menu order
    pub fn snapshot(&self) -> Vec<ModelUsage> {
        ModelId::ALL
            .iter()
            .map(|&model| ModelUsage::new(model, self.usages_remaining(model)))
            .collect()
    }
}
