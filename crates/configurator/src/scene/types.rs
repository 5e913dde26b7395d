use bevy::prelude::*;

use crate::layout::PlacedInstance;
use crate::structure::StructuralConfig;

/// The complete derived layout tree handed to the rendering collaborator.
///
/// Groups the rendering surface should skip are present but empty, so the
/// consumer never branches on tier or profile itself.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneDescriptor {
    pub structure: StructuralConfig,
    pub flower_mass: Vec<PlacedInstance>,
    pub flower_wall: Vec<PlacedInstance>,
    pub seating: Vec<PlacedInstance>,
    pub wreaths: Vec<PlacedInstance>,
    pub candles: Vec<PlacedInstance>,
    pub aux_lights: Vec<PlacedInstance>,
    pub particles: Vec<PlacedInstance>,
}

impl SceneDescriptor {
    /// Total instance count across all groups.
    pub fn instance_count(&self) -> usize {
        self.flower_mass.len()
            + self.flower_wall.len()
            + self.seating.len()
            + self.wreaths.len()
            + self.candles.len()
            + self.aux_lights.len()
            + self.particles.len()
    }
}
