//! Attendee seating grid.
//!
//! Left and right halves are generated independently around the center
//! aisle, so the aisle width is exact regardless of seat-count parity (odd
//! counts put the extra seat on the left half).

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

/// Half-width of the walking aisle; no seat center may fall inside it.
pub const AISLE_HALF_WIDTH: f32 = 0.8;
pub const SEAT_PITCH: f32 = 0.6;
pub const ROW_PITCH: f32 = 0.9;
pub const FRONT_ROW_Z: f32 = 2.0;

const SEAT_COLOR: Color = Color::srgb(0.133, 0.133, 0.133);

const GROUP: &str = "seating";

pub fn generate_seating(
    structure: &StructuralConfig,
    _profile: &PerformanceProfile,
    _rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let per_row = structure.seats_per_row;
    let right = per_row / 2;
    let left = per_row - right;

    let mut instances = Vec::with_capacity(structure.seat_count() as usize);
    for row in 0..structure.seat_rows {
        let z = FRONT_ROW_Z + row as f32 * ROW_PITCH;
        for (side, seats_on_side) in [(-1.0_f32, left), (1.0, right)] {
            for col in 0..seats_on_side {
                let x = side * (AISLE_HALF_WIDTH + col as f32 * SEAT_PITCH);
                instances.push(PlacedInstance::new(Vec3::new(x, 0.0, z), 1.0, SEAT_COLOR));
            }
        }
    }
    validated(GROUP, instances)
}
