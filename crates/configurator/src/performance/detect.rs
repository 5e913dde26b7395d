//! Capability-signal decision table.
//!
//! Evaluated top to bottom, first match wins: handheld override, then GPU
//! descriptor markers, then device memory thresholds, then the conservative
//! default. The marker lists are ordered so the more specific families
//! ("mali-g7") are claimed before the broad ones ("mali").

use super::types::{EnvironmentSignals, PerformanceTier};

/// Viewports narrower than this count as "small" for the handheld heuristic.
pub const SMALL_VIEWPORT_WIDTH: u32 = 768;

/// Device memory (GB) at or above which the memory fallback reports High.
pub const HIGH_MEMORY_GB: u32 = 8;
/// Device memory (GB) at or above which the memory fallback reports Medium.
pub const MEDIUM_MEMORY_GB: u32 = 4;

/// Discrete / desktop-class adapter families.
const HIGH_END_GPU_MARKERS: &[&str] = &["nvidia", "radeon", "geforce", "apple m"];
/// Capable mobile adapters.
const MID_RANGE_GPU_MARKERS: &[&str] = &["adreno 6", "mali-g7", "apple gpu"];
/// Integrated and older mobile adapters.
const LOW_END_GPU_MARKERS: &[&str] = &["intel", "adreno 5", "mali"];

/// Map best-effort environment signals to a quality tier.
pub fn detect_tier(signals: &EnvironmentSignals) -> PerformanceTier {
    if signals.is_handheld() {
        return PerformanceTier::Low;
    }

    if let Some(descriptor) = &signals.gpu_descriptor {
        let descriptor = descriptor.to_lowercase();
        let matches_any = |markers: &[&str]| markers.iter().any(|m| descriptor.contains(m));
        if matches_any(HIGH_END_GPU_MARKERS) {
            return PerformanceTier::High;
        }
        if matches_any(MID_RANGE_GPU_MARKERS) {
            return PerformanceTier::Medium;
        }
        if matches_any(LOW_END_GPU_MARKERS) {
            return PerformanceTier::Low;
        }
    }

    if let Some(memory) = signals.device_memory_gb {
        return if memory >= HIGH_MEMORY_GB {
            PerformanceTier::High
        } else if memory >= MEDIUM_MEMORY_GB {
            PerformanceTier::Medium
        } else {
            PerformanceTier::Low
        };
    }

    PerformanceTier::Medium
}
