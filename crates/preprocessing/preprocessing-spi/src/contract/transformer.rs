//! Transformer trait for fit / transform / inverse_transform over a [`Frame`].

use super::Estimator;
use crate::model::Frame;
use crate::Result;

/// Common trait for data transformers.
pub trait Transformer: Estimator + Send + Sync {
    /// Fit the transformer to data (learn or check parameters).
    fn fit(&mut self, x: &Frame) -> Result<()>;

    /// Transform data forward.
    fn transform(&self, x: &Frame) -> Result<Frame>;

    /// Inverse transform (undo the transformation).
    fn inverse_transform(&self, x: &Frame) -> Result<Frame>;

    /// Fit, then transform the same data.
    fn fit_transform(&mut self, x: &Frame) -> Result<Frame> {
        self.fit(x)?;
        self.transform(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreprocessingError;
    use ndarray::array;

    /// Mock implementation: scaling by a factor learned from the first value.
    struct ScalingStep {
        scale: Option<f64>,
    }

    impl Estimator for ScalingStep {
        fn name(&self) -> &str {
            "scaling"
        }

        fn is_fitted(&self) -> bool {
            self.scale.is_some()
        }
    }

    impl Transformer for ScalingStep {
        fn fit(&mut self, x: &Frame) -> Result<()> {
            let first = x.values().iter().next().copied().ok_or(PreprocessingError::EmptyInput {
                samples: x.n_samples(),
                features: x.n_features(),
            })?;
            self.scale = Some(if first == 0.0 { 1.0 } else { first });
            Ok(())
        }

        fn transform(&self, x: &Frame) -> Result<Frame> {
            let scale = self
                .scale
                .ok_or_else(|| PreprocessingError::FunctionFailed("not fitted".to_string()))?;
            Ok(Frame::new(x.values() / scale))
        }

        fn inverse_transform(&self, x: &Frame) -> Result<Frame> {
            let scale = self
                .scale
                .ok_or_else(|| PreprocessingError::FunctionFailed("not fitted".to_string()))?;
            Ok(Frame::new(x.values() * scale))
        }
    }

    #[test]
    fn test_fit_transform_default_method() {
        let mut step = ScalingStep { scale: None };
        let x = Frame::new(array![[2.0, 4.0], [6.0, 8.0]]);
        let out = step.fit_transform(&x).unwrap();

        assert!(step.is_fitted());
        assert_eq!(out.values(), &array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(step.inverse_transform(&out).unwrap().values(), x.values());
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let step = ScalingStep { scale: None };
        let x = Frame::new(array![[1.0]]);
        assert!(matches!(
            step.transform(&x),
            Err(PreprocessingError::FunctionFailed(_))
        ));
    }

    #[test]
    fn test_fit_empty_fails() {
        let mut step = ScalingStep { scale: None };
        let x = Frame::new(ndarray::Array2::<f64>::zeros((0, 2)));
        assert!(matches!(
            step.fit(&x),
            Err(PreprocessingError::EmptyInput { samples: 0, features: 2 })
        ));
    }

    #[test]
    fn test_boxed_trait_object() {
        let mut step: Box<dyn Transformer> = Box::new(ScalingStep { scale: None });
        let x = Frame::new(array![[5.0]]);
        step.fit(&x).unwrap();
        assert_eq!(step.name(), "scaling");
    }
}
