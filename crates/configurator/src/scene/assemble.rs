use bevy::prelude::*;
use rand::Rng;

use crate::layout::candles::generate_candles;
use crate::layout::flower_mass::generate_flower_mass;
use crate::layout::flower_wall::generate_flower_wall;
use crate::layout::lights::generate_aux_lights;
use crate::layout::particles::generate_particles;
use crate::layout::seating::generate_seating;
use crate::layout::style::FlowerStyle;
use crate::layout::wreaths::generate_wreaths;
use crate::layout::{GeneratorFailure, PlacedInstance};
use crate::performance::PerformanceProfile;
use crate::selections::Selections;
use crate::structure::StructuralConfig;

use super::types::SceneDescriptor;

/// Assemble the full layout tree.
///
/// Altar-coupled groups are skipped when the venue has no altar, wreaths
/// when the tier carries none, particles per the profile toggle. A single
/// failing generator degrades to an empty group; a decorative layout defect
/// must never block checkout.
pub fn assemble_scene(
    selections: &Selections,
    structure: &StructuralConfig,
    profile: &PerformanceProfile,
    rng: &mut impl Rng,
) -> SceneDescriptor {
    let style = FlowerStyle::from_selections(selections);

    let flower_mass = if structure.has_altar {
        recover("flower_mass", generate_flower_mass(structure, profile, &style, rng))
    } else {
        Vec::new()
    };
    let flower_wall = if structure.has_altar {
        recover("flower_wall", generate_flower_wall(structure, profile, &style, rng))
    } else {
        Vec::new()
    };
    let seating = recover("seating", generate_seating(structure, profile, rng));
    let wreaths = if structure.has_wreaths {
        recover("wreaths", generate_wreaths(structure, profile, &style, rng))
    } else {
        Vec::new()
    };
    let candles = if structure.has_altar && structure.has_religious_items {
        recover("candles", generate_candles(structure, profile, rng))
    } else {
        Vec::new()
    };
    let aux_lights = recover("aux_lights", generate_aux_lights(structure, profile, rng));
    let particles = if profile.particles_enabled {
        recover("particles", generate_particles(structure, profile, rng))
    } else {
        Vec::new()
    };

    SceneDescriptor {
        structure: structure.clone(),
        flower_mass,
        flower_wall,
        seating,
        wreaths,
        candles,
        aux_lights,
        particles,
    }
}

/// Substitute an empty group for a failed generator and report it.
fn recover(
    group: &'static str,
    result: Result<Vec<PlacedInstance>, GeneratorFailure>,
) -> Vec<PlacedInstance> {
    match result {
        Ok(instances) => instances,
        Err(err) => {
            warn!("layout group '{group}' degraded to empty: {err}");
            Vec::new()
        }
    }
}
