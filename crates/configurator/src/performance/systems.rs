use bevy::prelude::*;

use super::detect::detect_tier;
use super::profiles::profile;
use super::types::{EnvironmentSignals, PerformanceProfile, PerformanceTier};

/// Startup system: resolve the session's quality profile exactly once.
///
/// The host may insert an [`EnvironmentSignals`] resource before the app
/// starts; with no signals at all the session runs on the Medium profile.
pub fn resolve_performance_profile(
    signals: Option<Res<EnvironmentSignals>>,
    mut commands: Commands,
) {
    let resolved: PerformanceProfile = match signals.as_deref() {
        Some(signals) => *profile(detect_tier(signals)),
        None => *profile(PerformanceTier::Medium),
    };
    debug!("performance profile resolved: {:?}", resolved.tier);
    commands.insert_resource(resolved);
}

pub struct PerformancePlugin;

impl Plugin for PerformancePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, resolve_performance_profile);
    }
}
