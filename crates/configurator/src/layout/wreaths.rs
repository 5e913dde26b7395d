//! Memorial wreath stands along the side walls.
//!
//! Mirrored pairs at fixed depth spacing, colors alternating between the
//! accent main and white per stand.

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::style::FlowerStyle;
use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

pub const WREATH_PAIRS: u32 = 2;
pub const WREATH_DEPTH_PITCH: f32 = 2.0;
/// Stand clearance from the side wall.
const WALL_CLEARANCE: f32 = 1.2;
const FIRST_PAIR_OFFSET: f32 = 1.5;

const GROUP: &str = "wreaths";

pub fn generate_wreaths(
    structure: &StructuralConfig,
    _profile: &PerformanceProfile,
    style: &FlowerStyle,
    _rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let x_offset = structure.hall_width / 2.0 - WALL_CLEARANCE;
    let anchor_z = structure.altar_anchor_z();
    let palette = &style.palette;

    let mut instances = Vec::with_capacity((WREATH_PAIRS * 2) as usize);
    for pair in 0..WREATH_PAIRS {
        let z = anchor_z + FIRST_PAIR_OFFSET + pair as f32 * WREATH_DEPTH_PITCH;
        for side in [-1.0_f32, 1.0] {
            let color = if instances.len() % 2 == 0 {
                palette.main
            } else {
                palette.white
            };
            instances.push(PlacedInstance::new(
                Vec3::new(side * x_offset, 0.0, z),
                1.0,
                color,
            ));
        }
    }
    validated(GROUP, instances)
}
