//! Preprocessing Facade
//!
//! High-level API for function transformers and capability tags. Re-exports
//! all public types from the preprocessing stack for convenient usage.
//!
//! # Example
//!
//! ```ignore
//! use preprocessing_facade::prelude::*;
//!
//! let mut log1p = FunctionTransformer::builder()
//!     .func(|x, _| Ok(x.mapv(f64::ln_1p)))
//!     .inverse_func(|x, _| Ok(x.mapv(f64::exp_m1)))
//!     .build()?;
//! let out = log1p.fit_transform(&frame)?;
//! ```

// Re-export everything from core (which includes API and SPI)
pub use preprocessing_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Traits
    pub use preprocessing_spi::{Estimator, Transformer};
    pub use preprocessing_core::TagLayer;

    // Configuration
    pub use preprocessing_api::{FeatureNamesOutMode, FunctionTransformerConfig, KwArgs, Tolerance};

    // Data model and errors
    pub use preprocessing_spi::{
        keys, Frame, InverseCheckWarning, PreprocessingError, Result, TagSource, TagValue, Tags,
    };

    // Implementations
    pub use preprocessing_core::{
        compose, safe_tag, safe_tags, FeatureNamesOut, FunctionTransformer,
        FunctionTransformerBuilder, TagHierarchy,
    };
}
