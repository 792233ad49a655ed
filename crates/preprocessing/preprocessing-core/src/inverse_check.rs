//! Round-trip consistency check for forward/inverse function pairs.

use crate::validation::{allclose, max_abs_diff};
use crate::FunctionTransformer;
use preprocessing_api::{Frame, InverseCheckWarning, Result, Transformer};
use tracing::debug;

/// Row stride used to subsample the check input: every `max(1, rows / 100)`-th row.
pub fn subsample_stride(n_rows: usize) -> usize {
    (n_rows / 100).max(1)
}

/// Run `x`'s subsample forward then back through `transformer`.
///
/// Returns a warning when the round trip does not reproduce the subsample
/// within the configured tolerance. Errors from the functions propagate.
pub fn check_inverse_transform(
    transformer: &FunctionTransformer,
    x: &Frame,
) -> Result<Option<InverseCheckWarning>> {
    let stride = subsample_stride(x.n_samples());
    let sample = x.every_nth_row(stride);
    let round_trip = transformer.inverse_transform(&transformer.transform(&sample)?)?;

    debug!(
        stride,
        sampled_rows = sample.n_samples(),
        "checking inverse function round trip"
    );

    if allclose(sample.view(), round_trip.view(), transformer.config().tolerance) {
        return Ok(None);
    }
    Ok(Some(InverseCheckWarning {
        sampled_rows: sample.n_samples(),
        max_abs_diff: max_abs_diff(sample.view(), round_trip.view()),
    }))
}
