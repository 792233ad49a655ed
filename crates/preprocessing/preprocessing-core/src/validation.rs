//! Input validation

use ndarray::{ArrayView2, Zip};
use preprocessing_api::{Frame, PreprocessingError, Result, Tolerance};
use tracing::warn;

/// Check that `x` has at least one sample and one feature and only finite values.
pub fn check_array(x: &Frame) -> Result<()> {
    if x.n_samples() == 0 || x.n_features() == 0 {
        return Err(PreprocessingError::EmptyInput {
            samples: x.n_samples(),
            features: x.n_features(),
        });
    }
    if x.values().iter().any(|v| v.is_nan()) {
        return Err(PreprocessingError::NonFinite("NaN".to_string()));
    }
    if x.values().iter().any(|v| v.is_infinite()) {
        return Err(PreprocessingError::NonFinite("infinity".to_string()));
    }
    Ok(())
}

/// Check the feature count against the one recorded during fit.
pub fn check_n_features(estimator: &str, expected: Option<usize>, x: &Frame) -> Result<()> {
    match expected {
        Some(expected) if expected != x.n_features() => {
            Err(PreprocessingError::FeatureCountMismatch {
                estimator: estimator.to_string(),
                expected,
                actual: x.n_features(),
            })
        }
        _ => Ok(()),
    }
}

/// Check column names against the ones recorded during fit.
///
/// Differing names are an error. Names on only one side are logged and
/// otherwise ignored.
pub fn check_feature_names(estimator: &str, fitted: Option<&[String]>, x: &Frame) -> Result<()> {
    match (fitted, x.columns()) {
        (None, None) => Ok(()),
        (Some(_), None) => {
            warn!(
                estimator,
                "X does not have valid feature names, but it was fitted with feature names"
            );
            Ok(())
        }
        (None, Some(_)) => {
            warn!(
                estimator,
                "X has feature names, but it was fitted without feature names"
            );
            Ok(())
        }
        (Some(fitted), Some(current)) if fitted == current => Ok(()),
        (Some(fitted), Some(current)) => Err(PreprocessingError::FeatureNamesMismatch {
            reason: describe_name_difference(fitted, current),
        }),
    }
}

fn describe_name_difference(fitted: &[String], current: &[String]) -> String {
    let unseen: Vec<&str> = current
        .iter()
        .filter(|name| !fitted.contains(*name))
        .map(String::as_str)
        .collect();
    let missing: Vec<&str> = fitted
        .iter()
        .filter(|name| !current.contains(*name))
        .map(String::as_str)
        .collect();

    if unseen.is_empty() && missing.is_empty() {
        return "feature names must be in the same order as they were in fit".to_string();
    }

    let mut parts = Vec::new();
    if !unseen.is_empty() {
        parts.push(format!("unseen at fit time: {}", unseen.join(", ")));
    }
    if !missing.is_empty() {
        parts.push(format!("seen at fit time, yet now missing: {}", missing.join(", ")));
    }
    parts.join("; ")
}

/// Elementwise closeness of two arrays. Shapes must match; NaN never matches.
pub fn allclose(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>, tolerance: Tolerance) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    Zip::from(&a)
        .and(&b)
        .fold(true, |acc, &x, &y| acc && tolerance.is_close(x, y))
}

/// Largest absolute elementwise difference, or `None` when shapes differ.
///
/// Equal values contribute zero, infinities included. A NaN on either side
/// makes the result NaN.
pub fn max_abs_diff(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> Option<f64> {
    if a.shape() != b.shape() {
        return None;
    }
    Some(Zip::from(&a).and(&b).fold(0.0_f64, |acc, &x, &y| {
        if x == y {
            return acc;
        }
        let d = (x - y).abs();
        if acc.is_nan() || d.is_nan() {
            f64::NAN
        } else {
            acc.max(d)
        }
    }))
}
