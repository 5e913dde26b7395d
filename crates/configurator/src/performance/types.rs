use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Coarse quality tier derived from environment capability signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Low,
    Medium,
    High,
}

/// Quality-scaling profile for one tier.
///
/// Detected once per session and treated as read-only afterwards; no core
/// consumer may require a mid-session recompute.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub tier: PerformanceTier,
    /// Scales procedural instance counts; always in `(0, 1]`.
    pub density_multiplier: f32,
    pub shadows_enabled: bool,
    pub post_effects_enabled: bool,
    pub particles_enabled: bool,
    pub animations_enabled: bool,
    /// Upper bound on secondary light instances in the emitted layout.
    pub max_auxiliary_lights: u32,
    /// Bulbs on the ceiling fixture; zero removes the fixture ring entirely.
    pub chandelier_lights: u32,
    /// Mesh tessellation hint for the rendering collaborator.
    pub geometry_detail: f32,
}

/// Best-effort capability signals supplied by the host before startup.
///
/// Every field is optional; a missing signal falls through the decision
/// table to the conservative default, never to an error.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSignals {
    /// Reported device memory in whole gigabytes.
    pub device_memory_gb: Option<u32>,
    /// Raw graphics adapter/renderer descriptor string.
    pub gpu_descriptor: Option<String>,
    /// Primary pointing device is imprecise (touch).
    pub coarse_pointer: bool,
    /// Logical viewport width in pixels.
    pub viewport_width: Option<u32>,
}

impl EnvironmentSignals {
    /// Touch-primary on a small viewport: treated as a handheld device and
    /// forced to the lowest tier regardless of every other signal.
    pub fn is_handheld(&self) -> bool {
        self.coarse_pointer
            && self
                .viewport_width
                .is_some_and(|width| width < super::detect::SMALL_VIEWPORT_WIDTH)
    }
}
