//! srg-scene: placement sampling, relation scoring, and label assembly.

pub mod label;
pub mod placement;
pub mod scene;
pub mod score;

#[cfg(test)]
mod score_tests;

pub use label::false_predicates;
pub use placement::{Placement, SampleError};
pub use scene::{
    annotate_scene, demo_scene, label_scene, sample_labeled_scene, sample_scene, DEMO_MAX_BOUNDS,
};
pub use score::{near_relations, on_relations, on_table_relations, SCORER_ID};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
