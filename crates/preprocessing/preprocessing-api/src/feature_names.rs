//! Textual output feature-name modes.

use preprocessing_spi::{PreprocessingError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output feature-name modes expressible in configuration files.
///
/// Callables cannot be serialized; they are set directly on the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureNamesOutMode {
    /// Output names equal input names.
    #[serde(rename = "one-to-one")]
    OneToOne,
}

impl FeatureNamesOutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureNamesOutMode::OneToOne => "one-to-one",
        }
    }
}

impl FromStr for FeatureNamesOutMode {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one-to-one" => Ok(FeatureNamesOutMode::OneToOne),
            other => Err(PreprocessingError::InvalidParameter {
                name: "feature_names_out".to_string(),
                reason: format!(
                    "{:?} is invalid. It must either be \"one-to-one\" or a callable taking \
                     the transformer and the input feature names and returning the output \
                     feature names",
                    other
                ),
            }),
        }
    }
}

impl std::fmt::Display for FeatureNamesOutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
