pub mod detect;
pub mod profiles;
pub mod systems;
pub mod types;

pub use detect::detect_tier;
pub use profiles::profile;
pub use systems::PerformancePlugin;
pub use types::{EnvironmentSignals, PerformanceProfile, PerformanceTier};
