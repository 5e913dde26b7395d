//! Configuration resolution & procedural layout core.
//!
//! Maps session selections (service tier, theme, options, attendee count)
//! to two independent derived outputs: an itemized [`PriceQuote`] for the
//! checkout collaborator and a [`SceneDescriptor`] layout tree for the
//! rendering collaborator. Both are recomputed whenever the session's
//! [`Selections`] resource changes; neither depends on the other's result.
//!
//! All real logic lives in pure, deterministic functions; the ECS layer is
//! a thin recompute-on-change shell around them.

use bevy::prelude::*;

pub mod catalog;
pub mod layout;
pub mod performance;
pub mod pricing;
pub mod rng;
pub mod scene;
pub mod selections;
pub mod structure;

pub use catalog::{find_tier, TierDefinition, UnknownTierError, TIER_CATALOG};
pub use layout::{GeneratorFailure, PlacedInstance};
pub use performance::{
    detect_tier, EnvironmentSignals, PerformanceProfile, PerformanceTier,
};
pub use pricing::{resolve_price, PriceLineItem, PriceQuote};
pub use rng::LayoutSeed;
pub use scene::{assemble_scene, SceneDescriptor};
pub use selections::Selections;
pub use structure::{
    resolve_structure, StructuralClass, StructuralConfig, UnknownStructuralClassError,
};

/// Registers the whole configurator core on a bevy `App`.
///
/// The host may insert [`EnvironmentSignals`] before startup and mutate
/// [`Selections`] at any time; everything else is derived.
pub struct ConfiguratorPlugin;

impl Plugin for ConfiguratorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selections>();

        app.add_plugins((
            performance::PerformancePlugin,
            pricing::PricingPlugin,
            scene::ScenePlugin,
        ));
    }
}
