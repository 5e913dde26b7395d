//! Per-generator style lookup tables.
//!
//! The theme/volume/color branching that the generators share lives here as
//! small tables, so the generators themselves stay branch-light.

use bevy::prelude::*;

use crate::selections::{AccentColor, DecorationVolume, Selections, Theme};

/// Flower colors resolved from the selected accent family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerPalette {
    pub main: Color,
    pub accent: Color,
    pub white: Color,
    pub greenery: Color,
}

pub const FLOWER_WHITE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const FLOWER_GREENERY: Color = Color::srgb(0.180, 0.545, 0.341);

/// Main/accent pairs per color family. White and yellow share the soft
/// yellow accent.
pub fn flower_palette(accent: AccentColor) -> FlowerPalette {
    let (main, accent) = match accent {
        AccentColor::White => (FLOWER_WHITE, Color::srgb(1.0, 1.0, 0.667)),
        AccentColor::Pink => (
            Color::srgb(1.0, 0.718, 0.773),
            Color::srgb(1.0, 0.412, 0.706),
        ),
        AccentColor::Purple => (
            Color::srgb(0.902, 0.902, 0.980),
            Color::srgb(0.576, 0.439, 0.859),
        ),
        AccentColor::Yellow => (Color::srgb(1.0, 1.0, 0.867), Color::srgb(1.0, 1.0, 0.667)),
    };
    FlowerPalette {
        main,
        accent,
        white: FLOWER_WHITE,
        greenery: FLOWER_GREENERY,
    }
}

/// Style inputs shared by the flower generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerStyle {
    pub theme: Theme,
    pub volume: DecorationVolume,
    pub palette: FlowerPalette,
}

impl FlowerStyle {
    pub fn from_selections(selections: &Selections) -> Self {
        Self {
            theme: selections.theme,
            volume: selections.decoration_volume,
            palette: flower_palette(selections.accent_color),
        }
    }
}

/// Theme-independent flower-mass instance count per decoration volume.
pub fn base_count(volume: DecorationVolume) -> usize {
    match volume {
        DecorationVolume::Minimal => 3_000,
        DecorationVolume::Standard => 5_000,
        DecorationVolume::Lavish => 9_000,
    }
}

/// Floor for the density-scaled count; the arrangement must never
/// degenerate to nothing on the lowest performance tier.
pub const MIN_FLOWER_INSTANCES: usize = 250;

/// Apply the profile density multiplier to a base count.
pub fn scaled_count(base: usize, density_multiplier: f32) -> usize {
    ((base as f32 * density_multiplier) as usize).max(MIN_FLOWER_INSTANCES)
}

/// Linear interpolation between two colors in sRGB space.
pub fn lerp_srgb(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = from.to_srgba();
    let b = to.to_srgba();
    Color::srgb(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
    )
}
