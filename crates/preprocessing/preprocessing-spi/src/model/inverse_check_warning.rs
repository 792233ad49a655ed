//! Round-trip diagnostic emitted when forward and inverse functions disagree.

use serde::{Deserialize, Serialize};

/// Non-fatal warning: forward followed by inverse did not reproduce the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InverseCheckWarning {
    /// Rows checked after subsampling.
    pub sampled_rows: usize,
    /// Largest absolute elementwise difference, when the shapes matched.
    pub max_abs_diff: Option<f64>,
}

impl InverseCheckWarning {
    pub const MESSAGE: &'static str = "The provided functions are not strictly inverse of each other. \
         If you are sure you want to proceed regardless, set 'check_inverse=False'.";

    pub fn message(&self) -> &'static str {
        Self::MESSAGE
    }
}

impl std::fmt::Display for InverseCheckWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::MESSAGE)
    }
}
