#[cfg(test)]
mod tests {
    use crate::catalog::find_tier;
    use crate::performance::profiles::{HIGH_PROFILE, LOW_PROFILE};
    use crate::performance::PerformanceProfile;
    use crate::rng::LayoutSeed;
    use crate::scene::assemble::assemble_scene;
    use crate::scene::types::SceneDescriptor;
    use crate::selections::{DecorationVolume, Selections, Theme};
    use crate::structure::resolve_structure;

    fn assemble(selections: &Selections, profile: &PerformanceProfile, seed: u64) -> SceneDescriptor {
        let tier = find_tier(&selections.tier_id).unwrap();
        let structure = resolve_structure(tier.structural_class, selections.theme).unwrap();
        let mut rng = LayoutSeed(seed).rng();
        assemble_scene(selections, &structure, profile, &mut rng)
    }

    // -------------------------------------------------------------------------
    // Feature-flag driven group omission
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_altar_tier_yields_empty_altar_groups() {
        for theme in [Theme::Traditional, Theme::Modern, Theme::Nature] {
            let selections = Selections {
                tier_id: "direct".to_string(),
                theme,
                ..Selections::default()
            };
            let descriptor = assemble(&selections, &HIGH_PROFILE, 42);
            assert!(descriptor.flower_mass.is_empty());
            assert!(descriptor.flower_wall.is_empty());
            assert!(descriptor.candles.is_empty());
            assert!(descriptor.wreaths.is_empty());
            // Seating always survives, sized to the tier's class table.
            assert_eq!(
                descriptor.seating.len() as u32,
                descriptor.structure.seat_count()
            );
            assert!(!descriptor.seating.is_empty());
        }
    }

    #[test]
    fn test_altar_tier_populates_altar_groups() {
        let selections = Selections {
            tier_id: "general100".to_string(),
            ..Selections::default()
        };
        let descriptor = assemble(&selections, &HIGH_PROFILE, 42);
        assert!(!descriptor.flower_mass.is_empty());
        assert!(!descriptor.flower_wall.is_empty());
        assert!(!descriptor.candles.is_empty());
        assert!(!descriptor.wreaths.is_empty());
    }

    #[test]
    fn test_wreaths_only_on_large_class() {
        let selections = Selections {
            tier_id: "family60".to_string(),
            ..Selections::default()
        };
        let descriptor = assemble(&selections, &HIGH_PROFILE, 42);
        assert!(descriptor.wreaths.is_empty());
        assert!(!descriptor.flower_mass.is_empty());
    }

    // -------------------------------------------------------------------------
    // Profile toggles
    // -------------------------------------------------------------------------

    #[test]
    fn test_low_profile_disables_particles_and_fixture() {
        let selections = Selections::default();
        let descriptor = assemble(&selections, &LOW_PROFILE, 42);
        assert!(descriptor.particles.is_empty());
        assert!(descriptor.aux_lights.is_empty());
    }

    #[test]
    fn test_high_profile_enables_particles_and_fixture() {
        let selections = Selections::default();
        let descriptor = assemble(&selections, &HIGH_PROFILE, 42);
        assert!(!descriptor.particles.is_empty());
        assert!(!descriptor.aux_lights.is_empty());
    }

    #[test]
    fn test_lavish_flower_mass_shrinks_on_low_profile() {
        let selections = Selections {
            decoration_volume: DecorationVolume::Lavish,
            ..Selections::default()
        };
        let low = assemble(&selections, &LOW_PROFILE, 42);
        let high = assemble(&selections, &HIGH_PROFILE, 42);
        assert!(low.flower_mass.len() < high.flower_mass.len());
    }

    // -------------------------------------------------------------------------
    // Determinism
    // -------------------------------------------------------------------------

    #[test]
    fn test_same_seed_reproduces_descriptor() {
        let selections = Selections::default();
        let a = assemble(&selections, &HIGH_PROFILE, 7);
        let b = assemble(&selections, &HIGH_PROFILE, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_layout_not_counts() {
        let selections = Selections::default();
        let a = assemble(&selections, &HIGH_PROFILE, 7);
        let b = assemble(&selections, &HIGH_PROFILE, 8);
        assert_ne!(a, b);
        assert_eq!(a.flower_mass.len(), b.flower_mass.len());
        assert_eq!(a.seating, b.seating);
    }
}

#[cfg(test)]
mod app_tests {
    use bevy::prelude::*;

    use crate::performance::{EnvironmentSignals, PerformanceProfile, PerformanceTier};
    use crate::pricing::PriceQuote;
    use crate::scene::SceneDescriptor;
    use crate::selections::Selections;
    use crate::ConfiguratorPlugin;

    fn configured_app() -> App {
        let mut app = App::new();
        app.add_plugins(ConfiguratorPlugin);
        app
    }

    #[test]
    fn test_first_update_derives_both_outputs() {
        let mut app = configured_app();
        app.update();

        let quote = app.world().resource::<PriceQuote>();
        assert!(quote.total > 0);

        let descriptor = app.world().resource::<SceneDescriptor>();
        assert!(descriptor.instance_count() > 0);
    }

    #[test]
    fn test_missing_signals_resolve_to_medium() {
        let mut app = configured_app();
        app.update();
        let profile = app.world().resource::<PerformanceProfile>();
        assert_eq!(profile.tier, PerformanceTier::Medium);
    }

    #[test]
    fn test_host_signals_drive_profile() {
        let mut app = configured_app();
        app.insert_resource(EnvironmentSignals {
            gpu_descriptor: Some("NVIDIA GeForce RTX 3080".to_string()),
            ..EnvironmentSignals::default()
        });
        app.update();
        let profile = app.world().resource::<PerformanceProfile>();
        assert_eq!(profile.tier, PerformanceTier::High);
    }

    #[test]
    fn test_selection_change_recomputes_outputs() {
        let mut app = configured_app();
        app.update();
        let total_before = app.world().resource::<PriceQuote>().total;
        let seats_before = app.world().resource::<SceneDescriptor>().seating.len();

        app.world_mut().resource_mut::<Selections>().tier_id = "direct".to_string();
        app.update();

        let total_after = app.world().resource::<PriceQuote>().total;
        let descriptor = app.world().resource::<SceneDescriptor>();
        assert_ne!(total_before, total_after);
        assert_ne!(seats_before, descriptor.seating.len());
        assert_eq!(descriptor.seating.len(), 4);
        assert!(descriptor.flower_mass.is_empty());
    }

    #[test]
    fn test_unknown_tier_keeps_previous_outputs() {
        let mut app = configured_app();
        app.update();
        let quote_before = app.world().resource::<PriceQuote>().clone();
        let scene_before = app.world().resource::<SceneDescriptor>().clone();

        app.world_mut().resource_mut::<Selections>().tier_id = "bogus".to_string();
        app.update();

        assert_eq!(app.world().resource::<PriceQuote>(), &quote_before);
        assert_eq!(app.world().resource::<SceneDescriptor>(), &scene_before);
    }
}
