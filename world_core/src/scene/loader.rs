// world_core/src/scene/loader.rs
use crate::error::WorldError;

/// Host-side scene streaming seam.
pub trait SceneLoader {
    /// Begin an asynchronous load of `scene`. The returned handle starts
    /// with activation withheld; the orchestrator polls it per tick.
    fn begin_load(&mut self, scene: &str) -> Result<Box<dyn SceneLoad>, WorldError>;
}

/// One in-flight scene load.
pub trait SceneLoad {
    /// Name of the scene this load belongs to.
    fn scene(&self) -> &str;

    /// Load progress in [0, 1].
    fn progress(&self) -> f32;

    /// Permit or withhold the scene swap once loading is ready.
    fn allow_activation(&mut self, allow: bool);

    fn activation_allowed(&self) -> bool;

    /// True once the new scene has become the active one.
    fn is_activated(&self) -> bool;
}
