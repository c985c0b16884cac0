//! Good/bad finding accumulator shared by all checks.

use serde::{Deserialize, Serialize};

/// Ordered lists of human-readable findings produced by a check.
///
/// This is an accumulator, not a validated structure: entries keep their
/// append order and nothing deduplicates them. A check that delegates to
/// another check merges the sub-report onto its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Findings that support approving the request.
    pub good: Vec<String>,
    /// Findings a human administrator must look at before approving.
    pub bad: Vec<String>,
}

impl CheckReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_good(&mut self, message: impl Into<String>) {
        self.good.push(message.into());
    }

    pub fn push_bad(&mut self, message: impl Into<String>) {
        self.bad.push(message.into());
    }

    /// Append another report's findings onto this one, preserving order.
    pub fn merge(&mut self, other: Self) {
        self.good.extend(other.good);
        self.bad.extend(other.bad);
    }

    /// Whether any "bad" finding was recorded.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.bad.is_empty()
    }
}
