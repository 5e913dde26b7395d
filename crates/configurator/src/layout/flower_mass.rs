//! The main floral arrangement: a single instance cloud whose shape mode is
//! selected by the theme.
//!
//! Mountain: layered tapering heap. Wave: flowing asymmetric band. Scatter:
//! loose radial spread. All three share the volume-driven instance count and
//! the profile density scaling.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::performance::PerformanceProfile;
use crate::selections::Theme;
use crate::structure::StructuralConfig;

use super::style::{base_count, lerp_srgb, scaled_count, FlowerStyle};
use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

// Mountain mode. Instances are bucketed into discrete layers; each layer
// sits deeper and lower than the one before it.
const LAYER_COUNT: usize = 20;
const LAYER_DEPTH: f32 = 0.15;
const MOUND_HALF_WIDTH: f32 = 7.0;
/// Fractional half-width loss from the front layer to the back layer.
const MOUND_NARROWING: f32 = 0.4;
const PEAK_HEIGHT: f32 = 2.8;
const SILHOUETTE_CURVATURE: f32 = 0.08;
const BASE_LIFT: f32 = 0.5;
const FRONT_OFFSET: f32 = 0.5;
/// |x| bounds of the central accent band and the flanking base-color band;
/// everything beyond fades to white edges.
const ACCENT_BAND_HALF_WIDTH: f32 = 2.0;
const BASE_BAND_HALF_WIDTH: f32 = 3.5;

// Wave mode.
const WAVE_SPAN: f32 = 16.0;
const WAVE_DRIFT_FREQUENCY: f32 = 0.4;
const WAVE_DRIFT_DEPTH: f32 = 1.5;
const WAVE_SWELL_FREQUENCY: f32 = 0.3;
/// The right-hand tail of the wave settles lower than the body.
const WAVE_TAIL_START_X: f32 = 3.0;
const WAVE_TAIL_DAMPING: f32 = 0.7;
const WAVE_ACCENT_CHANCE: f64 = 0.2;

// Scatter mode.
const SCATTER_RADIUS: f32 = 7.0;
const SCATTER_DEPTH_SQUASH: f32 = 0.5;
const SCATTER_TALL_CHANCE: f64 = 0.1;
const SCATTER_GREENERY_WEIGHT: f64 = 0.4;

const GROUP: &str = "flower_mass";

pub fn generate_flower_mass(
    structure: &StructuralConfig,
    profile: &PerformanceProfile,
    style: &FlowerStyle,
    rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let count = scaled_count(base_count(style.volume), profile.density_multiplier);
    let anchor_z = structure.altar_anchor_z();

    let mut instances = Vec::with_capacity(count);
    for i in 0..count {
        let placed = match style.theme {
            Theme::Traditional => mountain_instance(i, count, anchor_z, style, rng),
            Theme::Modern => wave_instance(anchor_z, style, rng),
            Theme::Nature => scatter_instance(anchor_z, style, rng),
        };
        instances.push(placed);
    }
    validated(GROUP, instances)
}

fn mountain_instance(
    index: usize,
    count: usize,
    anchor_z: f32,
    style: &FlowerStyle,
    rng: &mut impl Rng,
) -> PlacedInstance {
    let u = index as f32 / count as f32;
    let layer = ((u * LAYER_COUNT as f32) as usize).min(LAYER_COUNT - 1);
    let spread = (u * LAYER_COUNT as f32).fract();
    let layer_t = layer as f32 / (LAYER_COUNT - 1) as f32;

    let half_width = MOUND_HALF_WIDTH * (1.0 - MOUND_NARROWING * layer_t);
    let x = (spread - 0.5) * 2.0 * half_width;
    let peak = PEAK_HEIGHT * (1.0 - layer_t * layer_t);
    let y = (peak - x * x * SILHOUETTE_CURVATURE).max(0.0) + BASE_LIFT + rng.gen::<f32>() * 0.3;
    let z = anchor_z + FRONT_OFFSET - layer as f32 * LAYER_DEPTH;

    let palette = &style.palette;
    let color = if x.abs() <= ACCENT_BAND_HALF_WIDTH {
        palette.accent
    } else if x.abs() <= BASE_BAND_HALF_WIDTH {
        palette.main
    } else {
        palette.white
    };

    PlacedInstance::new(Vec3::new(x, y, z), flower_scale(rng), color)
}

fn wave_instance(anchor_z: f32, style: &FlowerStyle, rng: &mut impl Rng) -> PlacedInstance {
    let x = (rng.gen::<f32>() - 0.5) * WAVE_SPAN;
    let drift = (x * WAVE_DRIFT_FREQUENCY).sin();
    let z = anchor_z + drift * WAVE_DRIFT_DEPTH + rng.gen::<f32>() * 0.5;
    let mut y = ((x * WAVE_SWELL_FREQUENCY).cos() + 1.0) + 0.5 + rng.gen::<f32>() * 0.5;
    if x > WAVE_TAIL_START_X {
        y *= WAVE_TAIL_DAMPING;
    }

    let palette = &style.palette;
    let mix = (x + WAVE_SPAN / 2.0) / WAVE_SPAN;
    let mut color = lerp_srgb(palette.white, palette.main, mix);
    if rng.gen_bool(WAVE_ACCENT_CHANCE) {
        color = lerp_srgb(color, palette.accent, 0.5);
    }

    PlacedInstance::new(Vec3::new(x, y, z), flower_scale(rng), color)
}

fn scatter_instance(anchor_z: f32, style: &FlowerStyle, rng: &mut impl Rng) -> PlacedInstance {
    let radius = rng.gen::<f32>() * SCATTER_RADIUS;
    let angle = rng.gen::<f32>() * TAU;
    let x = radius * angle.cos();
    let z = anchor_z + radius * angle.sin() * SCATTER_DEPTH_SQUASH;
    let mut y = 0.5 + rng.gen::<f32>() * 0.5;
    if rng.gen_bool(SCATTER_TALL_CHANCE) {
        y += 1.0;
    }

    let palette = &style.palette;
    let color = if rng.gen_bool(SCATTER_GREENERY_WEIGHT) {
        palette.greenery
    } else {
        palette.main
    };

    PlacedInstance::new(Vec3::new(x, y, z), flower_scale(rng), color)
}

fn flower_scale(rng: &mut impl Rng) -> f32 {
    0.6 + rng.gen::<f32>() * 0.8
}
