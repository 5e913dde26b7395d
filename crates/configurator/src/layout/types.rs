use bevy::prelude::*;

/// One generated decorative element: pure data, no identity beyond its
/// position in the emitted group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedInstance {
    pub position: Vec3,
    pub scale: f32,
    pub color: Color,
}

impl PlacedInstance {
    pub fn new(position: Vec3, scale: f32, color: Color) -> Self {
        Self {
            position,
            scale,
            color,
        }
    }
}
