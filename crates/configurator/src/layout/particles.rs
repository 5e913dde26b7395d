//! Ambient dust-mote particles filling the hall volume.

use bevy::prelude::*;
use rand::Rng;

use crate::performance::PerformanceProfile;
use crate::structure::StructuralConfig;

use super::types::PlacedInstance;
use super::{validated, GeneratorFailure};

pub const PARTICLE_BASE_COUNT: usize = 500;
const PARTICLE_SCALE: f32 = 0.05;
const PARTICLE_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

const GROUP: &str = "particles";

pub fn generate_particles(
    structure: &StructuralConfig,
    profile: &PerformanceProfile,
    rng: &mut impl Rng,
) -> Result<Vec<PlacedInstance>, GeneratorFailure> {
    let count = (PARTICLE_BASE_COUNT as f32 * profile.density_multiplier) as usize;

    let mut instances = Vec::with_capacity(count);
    for _ in 0..count {
        let x = (rng.gen::<f32>() - 0.5) * structure.hall_width;
        let y = rng.gen::<f32>() * structure.hall_height;
        let z = (rng.gen::<f32>() - 0.5) * structure.hall_depth;
        instances.push(PlacedInstance::new(
            Vec3::new(x, y, z),
            PARTICLE_SCALE,
            PARTICLE_COLOR,
        ));
    }
    validated(GROUP, instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::profiles::{HIGH_PROFILE, MEDIUM_PROFILE};
    use crate::selections::Theme;
    use crate::structure::resolve_structure;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_count_scales_with_density() {
        let structure = resolve_structure("medium", Theme::Modern).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let high = generate_particles(&structure, &HIGH_PROFILE, &mut rng).unwrap();
        let medium = generate_particles(&structure, &MEDIUM_PROFILE, &mut rng).unwrap();
        assert_eq!(high.len(), PARTICLE_BASE_COUNT);
        assert_eq!(
            medium.len(),
            (PARTICLE_BASE_COUNT as f32 * MEDIUM_PROFILE.density_multiplier) as usize
        );
    }

    #[test]
    fn test_particles_stay_inside_hall() {
        let structure = resolve_structure("small", Theme::Nature).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for instance in generate_particles(&structure, &HIGH_PROFILE, &mut rng).unwrap() {
            assert!(instance.position.x.abs() <= structure.hall_width / 2.0);
            assert!(instance.position.y >= 0.0 && instance.position.y <= structure.hall_height);
            assert!(instance.position.z.abs() <= structure.hall_depth / 2.0);
        }
    }
}
