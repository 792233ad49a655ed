//! Capability tag composition and lookup
//!
//! A type hierarchy is expressed as an ordered list of [`TagLayer`]s applied
//! from the root outward. Each layer receives its parent's tags by value,
//! adds or overwrites keys, and returns them, so descendants override
//! ancestors while ancestor keys they leave alone survive.

use preprocessing_api::{Estimator, PreprocessingError, Result, TagSource, TagValue, Tags};

/// One level of a capability hierarchy.
pub trait TagLayer {
    fn apply(&self, tags: Tags) -> Tags;
}

impl<F> TagLayer for F
where
    F: Fn(Tags) -> Tags,
{
    fn apply(&self, tags: Tags) -> Tags {
        self(tags)
    }
}

/// Apply `layers` to `base`, root first.
pub fn compose(base: Tags, layers: &[&dyn TagLayer]) -> Tags {
    layers.iter().fold(base, |tags, layer| layer.apply(tags))
}

/// Builder for a linearized tag hierarchy.
pub struct TagHierarchy {
    base: Tags,
    layers: Vec<Box<dyn TagLayer + Send + Sync>>,
}

impl TagHierarchy {
    /// Hierarchy rooted at the default tags.
    pub fn base() -> Self {
        Self::from_tags(Tags::defaults())
    }

    pub fn from_tags(base: Tags) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Append a layer below every layer added so far.
    pub fn layer(mut self, layer: impl TagLayer + Send + Sync + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Fold every layer over the base.
    pub fn resolve(&self) -> Tags {
        self.layers
            .iter()
            .fold(self.base.clone(), |tags, layer| layer.apply(tags))
    }
}

impl Default for TagHierarchy {
    fn default() -> Self {
        Self::base()
    }
}

/// Tags of `estimator`: its declared tags over the defaults, or the
/// defaults when it declares none.
pub fn safe_tags<E: Estimator + ?Sized>(estimator: &E) -> Tags {
    resolve(estimator).0
}

/// Value of a single tag of `estimator`.
pub fn safe_tag<E: Estimator + ?Sized>(estimator: &E, key: &str) -> Result<TagValue> {
    let (tags, provider) = resolve(estimator);
    tags.get(key)
        .cloned()
        .ok_or_else(|| PreprocessingError::UnknownTag {
            key: key.to_string(),
            provider,
            estimator: estimator.name().to_string(),
        })
}

fn resolve<E: Estimator + ?Sized>(estimator: &E) -> (Tags, TagSource) {
    match estimator.declared_tags() {
        Some(declared) => (Tags::defaults().merge(declared), TagSource::Declared),
        None => (Tags::defaults(), TagSource::Defaults),
    }
}
