// world_core/src/scene/content.rs
use glam::Vec2;
use crate::world::connectable::Connectable;

/// Query surface over the currently loaded scene.
///
/// Only what spawn placement needs: the connectables in the scene and the
/// player's body.
pub trait SceneContent {
    /// Every connectable currently loaded, in scene order.
    fn connectables_mut(&mut self) -> Vec<&mut dyn Connectable>;

    fn player_mut(&mut self) -> Option<&mut dyn PlayerAvatar>;
}

/// The player object, as far as spawn positioning is concerned.
pub trait PlayerAvatar {
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Offset of the collision shape from the object origin.
    fn collider_offset(&self) -> Vec2;
}
