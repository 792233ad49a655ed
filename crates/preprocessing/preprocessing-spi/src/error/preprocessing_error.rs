//! Preprocessing error types.

use crate::model::TagSource;
use thiserror::Error;

/// Errors that can occur during preprocessing operations.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// Invalid parameter or configuration value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Input has no samples or no features.
    #[error("Found array with {samples} sample(s) and {features} feature(s) while a minimum of 1 of each is required")]
    EmptyInput { samples: usize, features: usize },

    /// Input contains NaN or infinite values.
    #[error("Input contains {0}")]
    NonFinite(String),

    /// Number of input features differs from the number seen during fit.
    #[error("X has {actual} features, but {estimator} is expecting {expected} features as input")]
    FeatureCountMismatch {
        estimator: String,
        expected: usize,
        actual: usize,
    },

    /// Column names differ from the ones seen during fit.
    #[error("The feature names should match those that were passed during fit: {reason}")]
    FeatureNamesMismatch { reason: String },

    /// Explicit input feature names differ from the fitted ones.
    #[error("input_features is not equal to feature_names_in")]
    InputFeaturesMismatch,

    /// Explicit input feature names have the wrong length.
    #[error("input_features should have length equal to number of features ({expected}), got {actual}")]
    InputFeaturesLength { expected: usize, actual: usize },

    /// No source of input feature names is available.
    #[error("Unable to generate feature names without n_features_in: {0}")]
    FeatureNamesUnavailable(String),

    /// Output feature names were requested but no `feature_names_out` is configured.
    #[error("{0} has no feature_names_out configured; get_feature_names_out is unavailable")]
    FeatureNamesOutUndefined(String),

    /// Tag key not present in the resolved tags.
    #[error("The key {key} is not defined in {provider} for the class {estimator}.")]
    UnknownTag {
        key: String,
        provider: TagSource,
        estimator: String,
    },

    /// A user supplied function failed.
    #[error("Transformation failed: {0}")]
    FunctionFailed(String),
}
