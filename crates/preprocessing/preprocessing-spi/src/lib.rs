//! Preprocessing Service Provider Interface
//!
//! Defines the contracts and data model shared by preprocessing transformers:
//! - [`Estimator`] / [`Transformer`] contracts
//! - [`Frame`] tabular input with optional column names
//! - [`Tags`] capability descriptors and their default set
//! - [`PreprocessingError`] error type

pub mod contract;
pub mod error;
pub mod model;

pub use contract::{Estimator, Transformer};
pub use error::PreprocessingError;
pub use model::{keys, Frame, InverseCheckWarning, TagSource, TagValue, Tags};

/// Result type for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
