// world_core/src/world/passage.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_with::FromInto;
use serde_with::serde_as;
use crate::constants::{DEFAULT_TRANSITION, NONE_VALUE};
use crate::world::area_handle::AreaHandle;
use crate::world::connectable::Connectable;
use crate::world::selector::PassageSelector;
use crate::world::transistor::Transistor;
use crate::world::world_graph::WorldGraph;

/// An in-scene trigger representing one endpoint of a connection.
///
/// Lives and dies with its scene. `can_interact` debounces re-entry so a
/// player spawned on top of the trigger does not immediately bounce back.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Passage {
    /// Scene name of the owning area.
    pub area: Option<String>,
    pub passage: PassageSelector,
    pub can_interact: bool,
    #[serde_as(as = "FromInto<[f32; 2]>")]
    pub position: Vec2,
}

impl Default for Passage {
    fn default() -> Self {
        Self {
            area: None,
            passage: PassageSelector::default(),
            can_interact: true,
            position: Vec2::ZERO,
        }
    }
}

impl Passage {
    pub fn new(handle: &AreaHandle, position: Vec2) -> Self {
        let mut passage = Self {
            position,
            ..Self::default()
        };
        passage.set_passage_data(handle);
        passage
    }

    /// Scene name on the far side of the selected connection, resolved
    /// through the registry.
    pub fn target_scene(&self, graph: &WorldGraph) -> Option<String> {
        let area = graph.area(self.area.as_deref()?)?;
        let connection = area.get_connection(&self.passage.value)?;
        let target = connection.target.as_deref()?;
        graph.area(target).map(|a| a.scene.clone())
    }

    /// Player overlap began. Kick off a transition if this trigger is live.
    pub fn on_player_enter(&mut self, transistor: &mut Transistor) {
        if !self.can_interact {
            return;
        }

        if self.passage.is_none() {
            log::warn!(
                "Passage in area {:?} has no connection selected; not transitioning.",
                self.area
            );
            return;
        }

        let Some(origin) = self.area.clone() else {
            log::warn!("Passage has no area handle assigned; not transitioning.");
            return;
        };

        let Some(scene) = self.target_scene(transistor.graph()) else {
            log::error!(
                "Passage '{}' in area '{}' does not resolve to a scene.",
                self.passage.value,
                origin
            );
            return;
        };

        let value = self.passage.value.clone();

        // Block re-triggering until the overlap ends.
        self.can_interact = false;

        transistor.change_area_through(&origin, &scene, &value, DEFAULT_TRANSITION);
    }

    /// Player overlap ended; the trigger becomes live again.
    pub fn on_player_exit(&mut self) {
        if !self.can_interact {
            self.can_interact = true;
        }
    }
}

impl Connectable for Passage {
    fn area_name(&self) -> Option<&str> {
        self.area.as_deref()
    }

    fn value(&self) -> &str {
        &self.passage.value
    }

    fn can_interact(&self) -> bool {
        self.can_interact
    }

    fn set_can_interact(&mut self, status: bool) {
        self.can_interact = status;
    }

    fn set_passage_data(&mut self, handle: &AreaHandle) {
        self.area = Some(handle.scene.clone());
        self.passage.set_options(options_from_handle(Some(handle)));
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

/// Valid selector options for a handle: its connection names, or the single
/// sentinel when there is nothing to connect to.
pub fn options_from_handle(handle: Option<&AreaHandle>) -> Vec<String> {
    match handle {
        Some(handle) if handle.has_connections() => handle.connection_names(),
        _ => vec![NONE_VALUE.to_string()],
    }
}
