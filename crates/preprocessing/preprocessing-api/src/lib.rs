//! Preprocessing Consumer API
//!
//! Configuration types and DTOs for preprocessing consumers:
//!
//! - [`FunctionTransformerConfig`]: flags, keyword arguments and tolerances
//! - [`Tolerance`]: closeness bounds for the round-trip check
//! - [`FeatureNamesOutMode`]: textual output feature-name modes

mod config;
mod feature_names;

// Re-export SPI types
pub use preprocessing_spi::{
    keys, Estimator, Frame, InverseCheckWarning, PreprocessingError, Result, TagSource, TagValue,
    Tags, Transformer,
};

pub use config::{FunctionTransformerConfig, KwArgs, Tolerance};
pub use feature_names::FeatureNamesOutMode;
