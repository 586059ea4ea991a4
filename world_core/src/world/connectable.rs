// world_core/src/world/connectable.rs
use glam::Vec2;
use crate::world::area_handle::AreaHandle;

/// Capability implemented by in-scene passage triggers.
///
/// One connectable represents one endpoint of a connection inside the
/// currently loaded scene.
pub trait Connectable {
    /// Scene name of the owning area, if one is assigned.
    fn area_name(&self) -> Option<&str>;

    /// Currently selected passage value.
    fn value(&self) -> &str;

    fn can_interact(&self) -> bool;

    fn set_can_interact(&mut self, status: bool);

    /// Rebind to `handle` and recompute the selector's option list from it.
    fn set_passage_data(&mut self, handle: &AreaHandle);

    /// World position, used for spawn placement.
    fn position(&self) -> Vec2;
}
