//! Common types

use serde::{Deserialize, Serialize};

/// What `delete` does when a navigation item still has children.
///
/// Deliberately a configuration choice rather than a hardcoded behavior:
/// `Reject` refuses the delete while children exist, `Cascade` removes the
/// whole subtree (children before parents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    Reject,
    Cascade,
}

impl Default for DeletePolicy {
    fn default() -> Self {
        Self::Reject
    }
}
