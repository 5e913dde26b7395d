use bevy::prelude::*;

use crate::catalog::find_tier;
use crate::performance::PerformanceProfile;
use crate::rng::LayoutSeed;
use crate::selections::Selections;
use crate::structure::resolve_structure;

use super::assemble::assemble_scene;

/// System: re-assemble the layout tree whenever the selections or the seed
/// change.
///
/// Catalog and structural lookup failures are wiring bugs; the previous
/// descriptor (if any) stays in place and the failure is logged.
pub fn refresh_scene_descriptor(
    selections: Res<Selections>,
    seed: Res<LayoutSeed>,
    profile: Option<Res<PerformanceProfile>>,
    mut commands: Commands,
) {
    let Some(profile) = profile else {
        return;
    };
    if !selections.is_changed() && !seed.is_changed() && !profile.is_added() {
        return;
    }

    let tier = match find_tier(&selections.tier_id) {
        Ok(tier) => tier,
        Err(err) => {
            warn!("scene assembly skipped: {err}");
            return;
        }
    };
    let structure = match resolve_structure(tier.structural_class, selections.theme) {
        Ok(structure) => structure,
        Err(err) => {
            warn!("scene assembly skipped: {err}");
            return;
        }
    };

    let mut rng = seed.rng();
    let descriptor = assemble_scene(&selections, &structure, &profile, &mut rng);
    commands.insert_resource(descriptor);
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutSeed>()
            .add_systems(Update, refresh_scene_descriptor);
    }
}
