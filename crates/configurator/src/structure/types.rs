use std::str::FromStr;

use bevy::prelude::*;
use thiserror::Error;

/// Coarse venue-size category. Every catalog tier maps to one of these;
/// every structural count and dimension is a pure function of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralClass {
    None,
    Small,
    Medium,
    Large,
}

/// A structural-class key outside the declared domain.
///
/// Fatal by design: silently defaulting here would corrupt every downstream
/// seat and altar count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown structural class {0:?}")]
pub struct UnknownStructuralClassError(pub String);

impl FromStr for StructuralClass {
    type Err = UnknownStructuralClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(UnknownStructuralClassError(other.to_string())),
        }
    }
}

/// Cosmetic surface colors for the venue. Derived from the theme alone;
/// swapping themes never moves a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenuePalette {
    pub wall: Color,
    pub back_wall: Color,
    pub floor: Color,
    pub carpet: Color,
    pub drape: Color,
    pub trim: Color,
    pub altar_wood: Color,
}

/// Geometric and structural parameters of the configured venue.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralConfig {
    pub hall_width: f32,
    pub hall_depth: f32,
    pub hall_height: f32,
    /// Stepped altar platform count, 0 (no altar) through 4.
    pub altar_tiers: u8,
    pub altar_width: f32,
    pub altar_height: f32,
    pub seat_rows: u32,
    pub seats_per_row: u32,
    pub has_altar: bool,
    pub has_wreaths: bool,
    pub has_religious_items: bool,
    pub palette: VenuePalette,
}

impl StructuralConfig {
    /// Depth coordinate of the altar display anchor: just inside the back
    /// wall, where the altar-coupled generators center their output.
    pub fn altar_anchor_z(&self) -> f32 {
        -self.hall_depth / 2.0 + 1.5
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_rows * self.seats_per_row
    }
}
