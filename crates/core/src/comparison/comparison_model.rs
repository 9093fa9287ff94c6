//! Selection state for the building comparison set.
//!
//! The state is an explicit value passed by the caller, not an ambient
//! store. Every action returns a new state and leaves the original
//! untouched, so callers can keep, diff, or discard transitions freely.

use crate::constants::MAX_COMPARISON_TARGETS;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Buildings currently selected for comparison, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonState {
    targets: Vec<String>,
}

impl ComparisonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn is_selected(&self, building_id: &str) -> bool {
        self.targets.iter().any(|id| id == building_id)
    }

    /// Returns a new state with the building added. Adding an already
    /// selected building is a no-op; adding beyond the comparison cap is an
    /// error.
    pub fn with_target(&self, building_id: &str) -> Result<Self> {
        if self.is_selected(building_id) {
            return Ok(self.clone());
        }
        if self.targets.len() >= MAX_COMPARISON_TARGETS {
            return Err(Error::ComparisonFull(MAX_COMPARISON_TARGETS));
        }
        let mut next = self.clone();
        next.targets.push(building_id.to_string());
        Ok(next)
    }

    /// Returns a new state with the building removed; removing an
    /// unselected building is a no-op.
    pub fn without_target(&self, building_id: &str) -> Self {
        let mut next = self.clone();
        next.targets.retain(|id| id != building_id);
        next
    }

    pub fn cleared(&self) -> Self {
        Self::new()
    }
}
