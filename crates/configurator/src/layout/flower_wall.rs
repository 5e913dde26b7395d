//! Flower wall covering the altar face.
//!
//! A regular grid sized to fill the altar rectangle at a fixed cell size,
//! with per-cell jitter small enough that every instance stays inside its
//! own cell. Cells whose center falls inside the portrait exclusion
//! rectangle are skipped.

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::style::FlowerStyle;
use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

pub const WALL_CELL_WIDTH: f32 = 0.35;
pub const WALL_CELL_HEIGHT: f32 = 0.40;
/// Horizontal jitter half-range; strictly below half a cell so coverage is
/// preserved and the exclusion test stays exact.
pub const WALL_JITTER: f32 = 0.05;
const WALL_BASE_Y: f32 = 0.3;
const WALL_ROW_SETBACK: f32 = 0.15;
const WALL_FACE_OFFSET: f32 = 0.2;

const GROUP: &str = "flower_wall";

/// Rectangle reserved for the portrait display, in wall-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionRect {
    pub center_x: f32,
    pub center_y: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl ExclusionRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (x - self.center_x).abs() < self.half_width
            && (y - self.center_y).abs() < self.half_height
    }
}

/// The portrait sits centered, roughly two-thirds up the altar face.
pub fn portrait_exclusion(altar_height: f32) -> ExclusionRect {
    ExclusionRect {
        center_x: 0.0,
        center_y: altar_height * 0.7,
        half_width: 0.55,
        half_height: 0.45,
    }
}

pub fn generate_flower_wall(
    structure: &StructuralConfig,
    _profile: &PerformanceProfile,
    style: &FlowerStyle,
    rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let rows = (structure.altar_height / WALL_CELL_HEIGHT) as u32;
    let cols = (structure.altar_width / WALL_CELL_WIDTH) as u32;
    let exclusion = portrait_exclusion(structure.altar_height);
    let anchor_z = structure.altar_anchor_z();
    let palette = &style.palette;

    let mut instances = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let cell_x = (col as f32 - cols as f32 / 2.0 + 0.5) * WALL_CELL_WIDTH;
            let cell_y = row as f32 * WALL_CELL_HEIGHT + WALL_BASE_Y;
            if exclusion.contains(cell_x, cell_y) {
                continue;
            }

            let x = cell_x + (rng.gen::<f32>() - 0.5) * 2.0 * WALL_JITTER;
            let y = cell_y + (rng.gen::<f32>() - 0.5) * 2.0 * WALL_JITTER;
            let z = anchor_z + WALL_FACE_OFFSET - row as f32 * WALL_ROW_SETBACK
                + (rng.gen::<f32>() - 0.5) * 0.05;

            let is_white = rng.gen::<f32>() > 0.6;
            let is_green = rng.gen::<f32>() > 0.85;
            let color = if is_green {
                palette.greenery
            } else if is_white {
                palette.white
            } else {
                palette.main
            };

            let scale = 0.12 + rng.gen::<f32>() * 0.08;
            instances.push(PlacedInstance::new(Vec3::new(x, y, z), scale, color));
        }
    }
    validated(GROUP, instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::profiles::HIGH_PROFILE;
    use crate::selections::{Selections, Theme};
    use crate::structure::resolve_structure;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn wall(structure: &StructuralConfig, seed: u64) -> Vec<PlacedInstance> {
        let style = FlowerStyle::from_selections(&Selections::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_flower_wall(structure, &HIGH_PROFILE, &style, &mut rng).unwrap()
    }

    /// Snap an instance back to the center of the cell that produced it.
    fn nearest_cell_center(structure: &StructuralConfig, instance: &PlacedInstance) -> (f32, f32) {
        let cols = (structure.altar_width / WALL_CELL_WIDTH) as u32;
        let col = ((instance.position.x / WALL_CELL_WIDTH) + cols as f32 / 2.0 - 0.5).round();
        let row = ((instance.position.y - WALL_BASE_Y) / WALL_CELL_HEIGHT).round();
        (
            (col - cols as f32 / 2.0 + 0.5) * WALL_CELL_WIDTH,
            row * WALL_CELL_HEIGHT + WALL_BASE_Y,
        )
    }

    #[test]
    fn test_exclusion_zone_is_empty() {
        let structure = resolve_structure("large", Theme::Modern).unwrap();
        let exclusion = portrait_exclusion(structure.altar_height);
        for instance in wall(&structure, 13) {
            let (cx, cy) = nearest_cell_center(&structure, &instance);
            assert!(
                !exclusion.contains(cx, cy),
                "cell center ({cx}, {cy}) lies inside the portrait zone"
            );
        }
    }

    #[test]
    fn test_grid_fills_target_area() {
        let structure = resolve_structure("large", Theme::Modern).unwrap();
        let instances = wall(&structure, 13);
        assert!(!instances.is_empty());
        let rows = (structure.altar_height / WALL_CELL_HEIGHT) as u32;
        let cols = (structure.altar_width / WALL_CELL_WIDTH) as u32;
        // Every cell outside the exclusion zone is populated.
        let exclusion = portrait_exclusion(structure.altar_height);
        let mut expected = 0;
        for row in 0..rows {
            for col in 0..cols {
                let cell_x = (col as f32 - cols as f32 / 2.0 + 0.5) * WALL_CELL_WIDTH;
                let cell_y = row as f32 * WALL_CELL_HEIGHT + WALL_BASE_Y;
                if !exclusion.contains(cell_x, cell_y) {
                    expected += 1;
                }
            }
        }
        assert_eq!(instances.len(), expected);
    }

    #[test]
    fn test_jitter_stays_within_cell() {
        let structure = resolve_structure("medium", Theme::Modern).unwrap();
        for instance in wall(&structure, 29) {
            let (cx, cy) = nearest_cell_center(&structure, &instance);
            assert!((instance.position.x - cx).abs() <= WALL_JITTER + 1e-5);
            assert!((instance.position.y - cy).abs() <= WALL_JITTER + 1e-5);
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let structure = resolve_structure("small", Theme::Traditional).unwrap();
        assert_eq!(wall(&structure, 55), wall(&structure, 55));
    }

    #[test]
    fn test_exclusion_rect_contains() {
        let rect = portrait_exclusion(2.8);
        assert!(rect.contains(0.0, 2.8 * 0.7));
        assert!(!rect.contains(1.0, 2.8 * 0.7));
        assert!(!rect.contains(0.0, 0.3));
    }
}
