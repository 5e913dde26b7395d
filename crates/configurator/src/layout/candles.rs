//! Candle row flanking the offering table in front of the altar.

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

pub const CANDLE_PAIRS: u32 = 3;
pub const CANDLE_SPACING: f32 = 0.35;
const INNERMOST_OFFSET: f32 = 0.25;
const TABLE_HEIGHT: f32 = 0.5;
const TABLE_FORWARD: f32 = 2.5;

const WAX_IVORY: Color = Color::srgb(0.961, 0.961, 0.863);
const HOLDER_BRASS: Color = Color::srgb(0.831, 0.686, 0.216);

const GROUP: &str = "candles";

pub fn generate_candles(
    structure: &StructuralConfig,
    _profile: &PerformanceProfile,
    rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let z = structure.altar_anchor_z() + TABLE_FORWARD;

    let mut instances = Vec::with_capacity((CANDLE_PAIRS * 2) as usize);
    for pair in 0..CANDLE_PAIRS {
        let x = INNERMOST_OFFSET + pair as f32 * CANDLE_SPACING;
        let color = if pair % 2 == 0 { WAX_IVORY } else { HOLDER_BRASS };
        for side in [-1.0_f32, 1.0] {
            // Hand-set candles are never perfectly uniform in height.
            let scale = 0.9 + rng.gen::<f32>() * 0.2;
            instances.push(PlacedInstance::new(
                Vec3::new(side * x, TABLE_HEIGHT, z),
                scale,
                color,
            ));
        }
    }
    validated(GROUP, instances)
}
