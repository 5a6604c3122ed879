//! Static reference data: the input-field catalog and the demo sample pool.

mod definitions;
pub mod samples;

pub use definitions::{FeatureDefinition, Importance};
pub use samples::{
    featured_candidate, random_sample, sample_at, sample_pool, FeaturedCandidate, SampleDraw,
    SampleRow,
};

/// Input fields in form order.
pub fn feature_catalog() -> &'static [FeatureDefinition] {
    &definitions::FEATURE_DEFINITIONS
}

pub fn find_definition(name: &str) -> Option<&'static FeatureDefinition> {
    feature_catalog()
        .iter()
        .find(|definition| definition.name == name)
}
