pub mod assemble;
pub mod systems;
mod tests;
pub mod types;

pub use assemble::assemble_scene;
pub use systems::ScenePlugin;
pub use types::SceneDescriptor;
