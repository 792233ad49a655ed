//! Function transformer configuration

use crate::FeatureNamesOutMode;
use preprocessing_spi::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keyword arguments forwarded to a user function.
pub type KwArgs = BTreeMap<String, serde_json::Value>;

/// Elementwise closeness bounds: `|a - b| <= atol + rtol * |b|`.
///
/// Negative bounds are clamped to zero, on construction and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTolerance")]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawTolerance {
    rtol: f64,
    atol: f64,
}

impl Default for RawTolerance {
    fn default() -> Self {
        let Tolerance { rtol, atol } = Tolerance::default();
        Self { rtol, atol }
    }
}

impl From<RawTolerance> for Tolerance {
    fn from(raw: RawTolerance) -> Self {
        Tolerance::new(raw.rtol, raw.atol)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-7,
            atol: 1e-9,
        }
    }
}

impl Tolerance {
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self {
            rtol: rtol.max(0.0),
            atol: atol.max(0.0),
        }
    }

    /// Equal values are always close, infinities included. NaN is never close.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

/// Configuration for a function transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionTransformerConfig {
    /// Validate input before calling the functions
    pub validate: bool,
    /// Check on `fit` that the inverse function undoes the forward one
    pub check_inverse: bool,
    /// Output feature-name mode (`"one-to-one"`), if any
    pub feature_names_out: Option<String>,
    /// Keyword arguments for the forward function
    pub kw_args: KwArgs,
    /// Keyword arguments for the inverse function
    pub inv_kw_args: KwArgs,
    /// Round-trip check tolerance
    pub tolerance: Tolerance,
}

impl Default for FunctionTransformerConfig {
    fn default() -> Self {
        Self {
            validate: false,
            check_inverse: true,
            feature_names_out: None,
            kw_args: KwArgs::new(),
            inv_kw_args: KwArgs::new(),
            tolerance: Tolerance::default(),
        }
    }
}

impl FunctionTransformerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable input validation
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable or disable the round-trip check on fit
    pub fn check_inverse(mut self, check: bool) -> Self {
        self.check_inverse = check;
        self
    }

    /// Set the textual output feature-name mode
    pub fn feature_names_out(mut self, mode: impl Into<String>) -> Self {
        self.feature_names_out = Some(mode.into());
        self
    }

    /// Add a keyword argument for the forward function
    pub fn kw_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.kw_args.insert(key.into(), value.into());
        self
    }

    /// Add a keyword argument for the inverse function
    pub fn inv_kw_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.inv_kw_args.insert(key.into(), value.into());
        self
    }

    /// Set the round-trip check tolerance
    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Parse the textual output feature-name mode.
    ///
    /// Fails with `InvalidParameter` for anything but `"one-to-one"`.
    pub fn feature_names_out_mode(&self) -> Result<Option<FeatureNamesOutMode>> {
        self.feature_names_out
            .as_deref()
            .map(str::parse::<FeatureNamesOutMode>)
            .transpose()
    }
}
