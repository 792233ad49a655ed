//! Preprocessing Core
//!
//! Core implementations for preprocessing:
//! - [`FunctionTransformer`] wrapping user functions as a transformer
//! - Round-trip check of forward/inverse function pairs
//! - Input validation and feature-name resolution
//! - Capability tag composition ([`TagHierarchy`], [`safe_tags`])

mod feature_names;
mod function_transformer;
mod inverse_check;
mod tags;
pub mod validation;

pub use feature_names::resolve_input_features;
pub use function_transformer::{
    FeatureNamesFn, FeatureNamesOut, FunctionTransformer, FunctionTransformerBuilder, TransformFn,
};
pub use inverse_check::{check_inverse_transform, subsample_stride};
pub use tags::{compose, safe_tag, safe_tags, TagHierarchy, TagLayer};

// Re-export from API for convenience
pub use preprocessing_api::{
    keys, FeatureNamesOutMode, Frame, FunctionTransformerConfig, InverseCheckWarning, KwArgs,
    PreprocessingError, Result, TagSource, TagValue, Tags, Tolerance,
};

// Re-export SPI traits
pub use preprocessing_spi::{Estimator, Transformer};
