//! Error module containing preprocessing error types.

mod preprocessing_error;

pub use preprocessing_error::PreprocessingError;
