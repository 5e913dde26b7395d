//! Fixed per-tier quality profiles.
//!
//! These are static configuration, exposed as a table so they can be unit
//! tested independently of signal detection.

use super::types::{PerformanceProfile, PerformanceTier};

pub const HIGH_PROFILE: PerformanceProfile = PerformanceProfile {
    tier: PerformanceTier::High,
    density_multiplier: 1.0,
    shadows_enabled: true,
    post_effects_enabled: true,
    particles_enabled: true,
    animations_enabled: true,
    max_auxiliary_lights: 20,
    chandelier_lights: 6,
    geometry_detail: 1.0,
};

pub const MEDIUM_PROFILE: PerformanceProfile = PerformanceProfile {
    tier: PerformanceTier::Medium,
    density_multiplier: 0.4,
    shadows_enabled: true,
    post_effects_enabled: false,
    particles_enabled: true,
    animations_enabled: true,
    max_auxiliary_lights: 8,
    chandelier_lights: 2,
    geometry_detail: 0.7,
};

pub const LOW_PROFILE: PerformanceProfile = PerformanceProfile {
    tier: PerformanceTier::Low,
    density_multiplier: 0.2,
    shadows_enabled: false,
    post_effects_enabled: false,
    particles_enabled: false,
    animations_enabled: false,
    max_auxiliary_lights: 4,
    chandelier_lights: 0,
    geometry_detail: 0.5,
};

/// The profile record for a tier.
pub fn profile(tier: PerformanceTier) -> &'static PerformanceProfile {
    match tier {
        PerformanceTier::High => &HIGH_PROFILE,
        PerformanceTier::Medium => &MEDIUM_PROFILE,
        PerformanceTier::Low => &LOW_PROFILE,
    }
}
