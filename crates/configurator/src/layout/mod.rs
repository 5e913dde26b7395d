//! Procedural layout generators.
//!
//! One generator per decorative element class, all sharing the same shape:
//! `(structure, profile, style, rng) -> Result<Vec<PlacedInstance>, _>`.
//! Generators are pure and deterministic for a fixed (inputs, seed) pair:
//! the random source is always an injected parameter, never an ambient
//! generator, so snapshot-style tests can pin exact output.

pub mod candles;
pub mod flower_mass;
pub mod flower_wall;
pub mod lights;
pub mod particles;
pub mod seating;
pub mod style;
pub mod types;
pub mod wreaths;

pub use types::PlacedInstance;

use thiserror::Error;

/// A generator produced invalid data. Recovered at assembly scope by
/// substituting an empty group; never aborts the surrounding assembly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorFailure {
    #[error("instance {index} of group '{group}' has a non-finite position")]
    NonFinitePosition { group: &'static str, index: usize },
    #[error("instance {index} of group '{group}' has invalid scale {scale}")]
    InvalidScale {
        group: &'static str,
        index: usize,
        scale: f32,
    },
}

/// Output-validation pass every generator runs before returning.
pub(crate) fn validated(
    group: &'static str,
    instances: Vec<PlacedInstance>,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    for (index, instance) in instances.iter().enumerate() {
        if !instance.position.is_finite() {
            return Err(GeneratorFailure::NonFinitePosition { group, index });
        }
        if !instance.scale.is_finite() || instance.scale <= 0.0 {
            return Err(GeneratorFailure::InvalidScale {
                group,
                index,
                scale: instance.scale,
            });
        }
    }
    Ok(instances)
}
