//! Model module containing preprocessing data structures.
//!
//! - [`Frame`] - 2-D table of samples with optional column names
//! - [`Tags`] / [`TagValue`] - Capability descriptor
//! - [`TagSource`] - Where a tag lookup found its tags
//! - [`InverseCheckWarning`] - Non-fatal round-trip diagnostic

mod frame;
mod inverse_check_warning;
mod tag_source;
mod tag_value;
mod tags;

pub use frame::Frame;
pub use inverse_check_warning::InverseCheckWarning;
pub use tag_source::TagSource;
pub use tag_value::TagValue;
pub use tags::{keys, Tags};
