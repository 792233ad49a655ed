//! Estimator trait: a named object that may declare capability tags.

use crate::model::Tags;

/// Common trait for anything that can describe its capabilities.
pub trait Estimator {
    /// Name of this estimator, used in error messages.
    fn name(&self) -> &str;

    /// Tags this estimator declares, or `None` when it declares none.
    ///
    /// Implementations usually build on [`Tags::defaults`] and layer their
    /// own keys on top. Partial maps are fine: lookups merge them over the
    /// defaults.
    fn declared_tags(&self) -> Option<Tags> {
        None
    }

    /// Whether the estimator is ready for `transform`.
    fn is_fitted(&self) -> bool {
        false
    }
}
