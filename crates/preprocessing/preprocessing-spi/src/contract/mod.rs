//! Contract module containing preprocessing traits.
//!
//! - [`Estimator`] - Named object that may declare capability tags
//! - [`Transformer`] - fit / transform / inverse_transform over a [`Frame`](crate::Frame)

mod estimator;
mod transformer;

pub use estimator::Estimator;
pub use transformer::Transformer;
