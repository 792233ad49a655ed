//! Transformer built from arbitrary functions.
//!
//! [`FunctionTransformer`] forwards its input to a user function and returns
//! the result. Missing functions act as the identity. On `fit` it can
//! optionally validate the input and check, on a subsample, that the
//! inverse function undoes the forward one.

use crate::inverse_check::check_inverse_transform;
use crate::tags::TagHierarchy;
use crate::{feature_names, validation};
use ndarray::{Array2, ArrayView2};
use preprocessing_api::{
    keys, Estimator, FeatureNamesOutMode, Frame, FunctionTransformerConfig, InverseCheckWarning,
    KwArgs, PreprocessingError, Result, Tags, Tolerance, Transformer,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// A forward or inverse function: input view plus keyword arguments.
pub type TransformFn =
    Arc<dyn Fn(ArrayView2<'_, f64>, &KwArgs) -> Result<Array2<f64>> + Send + Sync>;

/// Output feature-name callable: the transformer plus resolved input names.
pub type FeatureNamesFn = Arc<
    dyn Fn(&FunctionTransformer, Option<&[String]>) -> Result<Vec<String>> + Send + Sync,
>;

/// How `get_feature_names_out` derives output names.
#[derive(Clone)]
pub enum FeatureNamesOut {
    /// Output names equal input names.
    OneToOne,
    /// Output names computed by a callable.
    Custom(FeatureNamesFn),
}

impl FeatureNamesOut {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&FunctionTransformer, Option<&[String]>) -> Result<Vec<String>>
            + Send
            + Sync
            + 'static,
    {
        FeatureNamesOut::Custom(Arc::new(f))
    }
}

impl From<FeatureNamesOutMode> for FeatureNamesOut {
    fn from(mode: FeatureNamesOutMode) -> Self {
        match mode {
            FeatureNamesOutMode::OneToOne => FeatureNamesOut::OneToOne,
        }
    }
}

impl std::fmt::Debug for FeatureNamesOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureNamesOut::OneToOne => write!(f, "OneToOne"),
            FeatureNamesOut::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Constructs a transformer from arbitrary functions.
#[derive(Clone)]
pub struct FunctionTransformer {
    func: Option<TransformFn>,
    inverse_func: Option<TransformFn>,
    feature_names_out: Option<FeatureNamesOut>,
    config: FunctionTransformerConfig,
    n_features_in: Option<usize>,
    feature_names_in: Option<Vec<String>>,
    warnings: Vec<InverseCheckWarning>,
}

impl FunctionTransformer {
    pub const NAME: &'static str = "FunctionTransformer";

    pub fn builder() -> FunctionTransformerBuilder {
        FunctionTransformerBuilder::new()
    }

    /// Transformer with no functions: both directions return the input.
    pub fn identity() -> Self {
        Self {
            func: None,
            inverse_func: None,
            feature_names_out: None,
            config: FunctionTransformerConfig::default(),
            n_features_in: None,
            feature_names_in: None,
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &FunctionTransformerConfig {
        &self.config
    }

    pub fn has_func(&self) -> bool {
        self.func.is_some()
    }

    pub fn has_inverse_func(&self) -> bool {
        self.inverse_func.is_some()
    }

    /// Number of features seen during fit. Only recorded when validating.
    pub fn n_features_in(&self) -> Option<usize> {
        self.n_features_in
    }

    /// Column names seen during fit. Only recorded when validating.
    pub fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }

    /// Warnings raised by the most recent `fit`.
    pub fn warnings(&self) -> &[InverseCheckWarning] {
        &self.warnings
    }

    pub fn feature_names_out(&self) -> Option<&FeatureNamesOut> {
        self.feature_names_out.as_ref()
    }

    /// Output feature names.
    ///
    /// Only available when `feature_names_out` is configured.
    pub fn get_feature_names_out(&self, input_features: Option<&[String]>) -> Result<Vec<String>> {
        let mode = self
            .feature_names_out
            .as_ref()
            .ok_or_else(|| PreprocessingError::FeatureNamesOutUndefined(Self::NAME.to_string()))?;

        let resolved = if self.n_features_in.is_some() || input_features.is_some() {
            Some(feature_names::resolve_input_features(
                Self::NAME,
                self.n_features_in,
                self.feature_names_in.as_deref(),
                input_features,
            )?)
        } else {
            None
        };

        match mode {
            FeatureNamesOut::OneToOne => resolved.ok_or_else(|| {
                PreprocessingError::FeatureNamesUnavailable(
                    "with feature_names_out=\"one-to-one\", pass input_features or fit \
                     with validate enabled"
                        .to_string(),
                )
            }),
            FeatureNamesOut::Custom(f) => f(self, resolved.as_deref()),
        }
    }

    fn apply(func: Option<&TransformFn>, x: &Frame, kw_args: &KwArgs) -> Result<Frame> {
        match func {
            None => Ok(x.clone()),
            Some(f) => f(x.view(), kw_args).map(Frame::new),
        }
    }
}

impl Default for FunctionTransformer {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for FunctionTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTransformer")
            .field("func", &self.func.as_ref().map(|_| ".."))
            .field("inverse_func", &self.inverse_func.as_ref().map(|_| ".."))
            .field("feature_names_out", &self.feature_names_out)
            .field("config", &self.config)
            .field("n_features_in", &self.n_features_in)
            .field("feature_names_in", &self.feature_names_in)
            .finish()
    }
}

impl Estimator for FunctionTransformer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn declared_tags(&self) -> Option<Tags> {
        let validate = self.config.validate;
        let tags = TagHierarchy::base()
            .layer(move |tags: Tags| {
                tags.with(keys::NO_VALIDATION, !validate)
                    .with(keys::STATELESS, true)
            })
            .resolve();
        Some(tags)
    }

    /// Always true: the transformer holds no learned state.
    fn is_fitted(&self) -> bool {
        true
    }
}

impl Transformer for FunctionTransformer {
    fn fit(&mut self, x: &Frame) -> Result<()> {
        self.warnings.clear();
        debug!(
            n_samples = x.n_samples(),
            n_features = x.n_features(),
            validate = self.config.validate,
            "fitting function transformer"
        );

        if self.config.validate {
            validation::check_array(x)?;
            self.n_features_in = Some(x.n_features());
            self.feature_names_in = x.columns().map(<[String]>::to_vec);
        }

        if self.config.check_inverse && self.func.is_some() && self.inverse_func.is_some() {
            if let Some(warning) = check_inverse_transform(self, x)? {
                warn!(
                    sampled_rows = warning.sampled_rows,
                    max_abs_diff = ?warning.max_abs_diff,
                    "{}",
                    warning
                );
                self.warnings.push(warning);
            }
        }
        Ok(())
    }

    fn transform(&self, x: &Frame) -> Result<Frame> {
        if self.config.validate {
            validation::check_array(x)?;
            validation::check_feature_names(Self::NAME, self.feature_names_in.as_deref(), x)?;
            validation::check_n_features(Self::NAME, self.n_features_in, x)?;
        }
        Self::apply(self.func.as_ref(), x, &self.config.kw_args)
    }

    fn inverse_transform(&self, x: &Frame) -> Result<Frame> {
        if self.config.validate {
            validation::check_array(x)?;
        }
        Self::apply(self.inverse_func.as_ref(), x, &self.config.inv_kw_args)
    }
}

/// Builder for [`FunctionTransformer`].
#[derive(Clone, Default)]
pub struct FunctionTransformerBuilder {
    func: Option<TransformFn>,
    inverse_func: Option<TransformFn>,
    feature_names_out: Option<FeatureNamesOut>,
    config: FunctionTransformerConfig,
}

impl FunctionTransformerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward function. Absent means identity.
    pub fn func<F>(mut self, f: F) -> Self
    where
        F: Fn(ArrayView2<'_, f64>, &KwArgs) -> Result<Array2<f64>> + Send + Sync + 'static,
    {
        self.func = Some(Arc::new(f));
        self
    }

    /// Inverse function. Absent means identity.
    pub fn inverse_func<F>(mut self, f: F) -> Self
    where
        F: Fn(ArrayView2<'_, f64>, &KwArgs) -> Result<Array2<f64>> + Send + Sync + 'static,
    {
        self.inverse_func = Some(Arc::new(f));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: FunctionTransformerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.config.validate = validate;
        self
    }

    pub fn check_inverse(mut self, check: bool) -> Self {
        self.config.check_inverse = check;
        self
    }

    pub fn kw_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.kw_args.insert(key.into(), value.into());
        self
    }

    pub fn kw_args(mut self, kw_args: KwArgs) -> Self {
        self.config.kw_args = kw_args;
        self
    }

    pub fn inv_kw_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.inv_kw_args.insert(key.into(), value.into());
        self
    }

    pub fn inv_kw_args(mut self, inv_kw_args: KwArgs) -> Self {
        self.config.inv_kw_args = inv_kw_args;
        self
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Output feature names; takes precedence over the configured text mode.
    pub fn feature_names_out(mut self, feature_names_out: impl Into<FeatureNamesOut>) -> Self {
        self.feature_names_out = Some(feature_names_out.into());
        self
    }

    /// Build the transformer.
    ///
    /// Fails when the configured `feature_names_out` text is not a known mode.
    pub fn build(self) -> Result<FunctionTransformer> {
        let configured = self.config.feature_names_out_mode()?;
        let feature_names_out = self
            .feature_names_out
            .or_else(|| configured.map(FeatureNamesOut::from));

        Ok(FunctionTransformer {
            func: self.func,
            inverse_func: self.inverse_func,
            feature_names_out,
            config: self.config,
            n_features_in: None,
            feature_names_in: None,
            warnings: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use preprocessing_api::TagValue;

    fn shift(x: ArrayView2<'_, f64>, kw: &KwArgs) -> Result<Array2<f64>> {
        let by = kw.get("by").and_then(|v| v.as_f64()).unwrap_or(0.0);
        Ok(x.mapv(|v| v + by))
    }

    fn unshift(x: ArrayView2<'_, f64>, kw: &KwArgs) -> Result<Array2<f64>> {
        let by = kw.get("by").and_then(|v| v.as_f64()).unwrap_or(0.0);
        Ok(x.mapv(|v| v - by))
    }

    #[test]
    fn test_identity_transform_returns_input() {
        let t = FunctionTransformer::identity();
        let x = Frame::with_columns(array![[1.0, 2.0], [3.0, 4.0]], ["a", "b"]).unwrap();

        assert_eq!(t.transform(&x).unwrap(), x);
        assert_eq!(t.inverse_transform(&x).unwrap(), x);
    }

    #[test]
    fn test_kw_args_reach_functions() {
        let t = FunctionTransformer::builder()
            .func(shift)
            .inverse_func(unshift)
            .kw_arg("by", 10.0)
            .inv_kw_arg("by", 10.0)
            .build()
            .unwrap();
        let x = Frame::new(array![[1.0, 2.0]]);

        let forward = t.transform(&x).unwrap();
        assert_eq!(forward.values(), &array![[11.0, 12.0]]);
        assert_eq!(t.inverse_transform(&forward).unwrap().values(), x.values());
    }

    #[test]
    fn test_fit_records_shape_only_when_validating() {
        let x = Frame::with_columns(array![[1.0, 2.0]], ["a", "b"]).unwrap();

        let mut plain = FunctionTransformer::identity();
        plain.fit(&x).unwrap();
        assert_eq!(plain.n_features_in(), None);
        assert_eq!(plain.feature_names_in(), None);

        let mut validating = FunctionTransformer::builder().validate(true).build().unwrap();
        validating.fit(&x).unwrap();
        assert_eq!(validating.n_features_in(), Some(2));
        assert_eq!(
            validating.feature_names_in(),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut t = FunctionTransformer::builder().validate(true).build().unwrap();
        let x = Frame::new(array![[1.0, f64::NAN]]);
        assert!(matches!(t.fit(&x), Err(PreprocessingError::NonFinite(_))));
    }

    #[test]
    fn test_without_validation_nan_passes_through() {
        let t = FunctionTransformer::identity();
        let x = Frame::new(array![[f64::NAN]]);
        assert!(t.transform(&x).unwrap().values()[[0, 0]].is_nan());
    }

    #[test]
    fn test_transform_checks_feature_count() {
        let mut t = FunctionTransformer::builder().validate(true).build().unwrap();
        t.fit(&Frame::new(array![[1.0, 2.0]])).unwrap();

        let err = t.transform(&Frame::new(array![[1.0, 2.0, 3.0]])).unwrap_err();
        assert!(matches!(
            err,
            PreprocessingError::FeatureCountMismatch { expected: 2, actual: 3, .. }
        ));
    }

    #[test]
    fn test_inverse_transform_skips_feature_count() {
        let mut t = FunctionTransformer::builder().validate(true).build().unwrap();
        t.fit(&Frame::new(array![[1.0, 2.0]])).unwrap();
        assert!(t.inverse_transform(&Frame::new(array![[1.0, 2.0, 3.0]])).is_ok());
    }

    #[test]
    fn test_function_error_propagates() {
        let t = FunctionTransformer::builder()
            .func(|_x, _kw| Err(PreprocessingError::FunctionFailed("boom".to_string())))
            .build()
            .unwrap();
        let err = t.transform(&Frame::new(array![[1.0]])).unwrap_err();
        assert_eq!(err.to_string(), "Transformation failed: boom");
    }

    #[test]
    fn test_tags_reflect_validate() {
        let t = FunctionTransformer::identity();
        let tags = t.declared_tags().unwrap();
        assert_eq!(tags.get_bool(keys::NO_VALIDATION), Some(true));
        assert_eq!(tags.get_bool(keys::STATELESS), Some(true));
        assert_eq!(tags.get(keys::X_TYPES), Some(&TagValue::from(vec!["2darray"])));

        let t = FunctionTransformer::builder().validate(true).build().unwrap();
        assert_eq!(
            t.declared_tags().unwrap().get_bool(keys::NO_VALIDATION),
            Some(false)
        );
        assert!(t.is_fitted());
    }

    #[test]
    fn test_build_rejects_invalid_feature_names_out() {
        let result = FunctionTransformer::builder()
            .config(FunctionTransformerConfig::new().feature_names_out("bad"))
            .build();
        assert!(matches!(
            result,
            Err(PreprocessingError::InvalidParameter { ref name, .. }) if name == "feature_names_out"
        ));
    }

    #[test]
    fn test_feature_names_out_accessor() {
        assert!(FunctionTransformer::identity().feature_names_out().is_none());

        let t = FunctionTransformer::builder()
            .feature_names_out(FeatureNamesOutMode::OneToOne)
            .build()
            .unwrap();
        assert!(matches!(t.feature_names_out(), Some(FeatureNamesOut::OneToOne)));

        let t = FunctionTransformer::builder()
            .config(FunctionTransformerConfig::new().feature_names_out("one-to-one"))
            .build()
            .unwrap();
        assert!(matches!(t.feature_names_out(), Some(FeatureNamesOut::OneToOne)));
    }

    #[test]
    fn test_feature_names_out_undefined() {
        let t = FunctionTransformer::identity();
        assert!(matches!(
            t.get_feature_names_out(None),
            Err(PreprocessingError::FeatureNamesOutUndefined(_))
        ));
    }

    #[test]
    fn test_debug_hides_functions() {
        let t = FunctionTransformer::builder().func(shift).build().unwrap();
        let debug = format!("{:?}", t);
        assert!(debug.contains("FunctionTransformer"));
        assert!(debug.contains("Some(\"..\")"));
    }
}
