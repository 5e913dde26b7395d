//! Secondary light instances: the ceiling fixture's bulb ring.
//!
//! Bulb count comes from the performance profile and is additionally capped
//! by the profile's auxiliary-light budget; the Low profile removes the
//! fixture entirely.

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

use std::f32::consts::TAU;

pub const FIXTURE_RING_RADIUS: f32 = 0.3;
const FIXTURE_DROP: f32 = 0.5;
const BULB_SCALE: f32 = 0.04;
const BULB_WARM: Color = Color::srgb(1.0, 0.973, 0.933);

const GROUP: &str = "aux_lights";

pub fn generate_aux_lights(
    structure: &StructuralConfig,
    profile: &PerformanceProfile,
    _rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let bulbs = profile.chandelier_lights.min(profile.max_auxiliary_lights);
    let y = structure.hall_height - FIXTURE_DROP;

    let mut instances = Vec::with_capacity(bulbs as usize);
    for i in 0..bulbs {
        let angle = i as f32 / bulbs as f32 * TAU;
        instances.push(PlacedInstance::new(
            Vec3::new(
                angle.cos() * FIXTURE_RING_RADIUS,
                y,
                angle.sin() * FIXTURE_RING_RADIUS,
            ),
            BULB_SCALE,
            BULB_WARM,
        ));
    }
    validated(GROUP, instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::profiles::{HIGH_PROFILE, LOW_PROFILE, MEDIUM_PROFILE};
    use crate::selections::Theme;
    use crate::structure::resolve_structure;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lights(profile: &PerformanceProfile) -> Vec<PlacedInstance> {
        let structure = resolve_structure("large", Theme::Modern).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        generate_aux_lights(&structure, profile, &mut rng).unwrap()
    }

    #[test]
    fn test_bulb_count_follows_profile() {
        assert_eq!(lights(&HIGH_PROFILE).len() as u32, 6);
        assert_eq!(lights(&MEDIUM_PROFILE).len() as u32, 2);
        assert!(lights(&LOW_PROFILE).is_empty());
    }

    #[test]
    fn test_bulbs_hang_below_ceiling_on_ring() {
        let structure = resolve_structure("large", Theme::Modern).unwrap();
        for instance in lights(&HIGH_PROFILE) {
            assert!(instance.position.y < structure.hall_height);
            let radial =
                (instance.position.x.powi(2) + instance.position.z.powi(2)).sqrt();
            assert!((radial - FIXTURE_RING_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn test_auxiliary_budget_caps_bulbs() {
        let tight = PerformanceProfile {
            max_auxiliary_lights: 3,
            ..HIGH_PROFILE
        };
        assert_eq!(lights(&tight).len(), 3);
    }
}
