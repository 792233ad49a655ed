//! Provenance of resolved tags.

use serde::{Deserialize, Serialize};

/// Where a tag lookup found its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagSource {
    /// The estimator declared its own tags (merged over the defaults).
    Declared,
    /// The estimator declares nothing; only the default tags apply.
    Defaults,
}

impl std::fmt::Display for TagSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagSource::Declared => write!(f, "declared tags"),
            TagSource::Defaults => write!(f, "default tags"),
        }
    }
}
