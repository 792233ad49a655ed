//! Input feature-name resolution

use preprocessing_api::{PreprocessingError, Result};

/// Resolve the input feature names of a fitted estimator.
///
/// Explicit `input_features` win but must agree with what was seen during
/// fit. Otherwise the fitted names are used, and failing that names
/// `x0, x1, ...` are generated from the fitted feature count.
pub fn resolve_input_features(
    estimator: &str,
    n_features_in: Option<usize>,
    feature_names_in: Option<&[String]>,
    input_features: Option<&[String]>,
) -> Result<Vec<String>> {
    if let Some(input) = input_features {
        if let Some(fitted) = feature_names_in {
            if fitted != input {
                return Err(PreprocessingError::InputFeaturesMismatch);
            }
        }
        if let Some(expected) = n_features_in {
            if input.len() != expected {
                return Err(PreprocessingError::InputFeaturesLength {
                    expected,
                    actual: input.len(),
                });
            }
        }
        return Ok(input.to_vec());
    }

    if let Some(fitted) = feature_names_in {
        return Ok(fitted.to_vec());
    }

    match n_features_in {
        Some(n) => Ok((0..n).map(|i| format!("x{}", i)).collect()),
        None => Err(PreprocessingError::FeatureNamesUnavailable(estimator.to_string())),
    }
}
