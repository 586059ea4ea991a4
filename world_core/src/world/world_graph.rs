// world_core/src/world/world_graph.rs
use serde::{Deserialize, Serialize};
use crate::constants::NONE_VALUE;
use crate::error::WorldError;
use crate::world::area_handle::AreaHandle;
use crate::world::connection::Connection;

/// The registry of every authored area, in authoring order.
///
/// All editing goes through this type so that any change to an area's
/// connection list refreshes the passage selectors of every connection in
/// the graph that points at it.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct WorldGraph {
    pub areas: Vec<AreaHandle>,
}

impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self, scene: &str) -> Option<&AreaHandle> {
        self.areas.iter().find(|a| a.scene == scene)
    }

    pub fn area_mut(&mut self, scene: &str) -> Option<&mut AreaHandle> {
        self.areas.iter_mut().find(|a| a.scene == scene)
    }

    pub fn area_at(&self, index: usize) -> Option<&AreaHandle> {
        self.areas.get(index)
    }

    pub fn contains(&self, scene: &str) -> bool {
        self.areas.iter().any(|a| a.scene == scene)
    }

    /// Register a new area and refresh selectors that already point at it.
    pub fn add_area(&mut self, area: AreaHandle) {
        self.areas.push(area);
        self.sync_passage_selectors();
    }

    /// Remove an area. Connections elsewhere that targeted it collapse to
    /// the sentinel on the resynchronization pass.
    pub fn remove_area(&mut self, scene: &str) {
        self.areas.retain(|a| a.scene != scene);
        self.sync_passage_selectors();
    }

    /// Append a connection to an area. Names must be unique per area.
    pub fn add_connection(
        &mut self,
        scene: &str,
        connection: Connection,
    ) -> Result<(), WorldError> {
        let area = self
            .area_mut(scene)
            .ok_or_else(|| WorldError::AreaNotFound(scene.to_string()))?;

        if area.connection_exists(&connection.name) {
            return Err(WorldError::DuplicateConnection {
                area: scene.to_string(),
                name: connection.name,
            });
        }

        area.connections.push(connection);
        self.sync_passage_selectors();
        Ok(())
    }

    pub fn remove_connection(
        &mut self,
        scene: &str,
        connection_name: &str,
    ) -> Result<(), WorldError> {
        let area = self
            .area_mut(scene)
            .ok_or_else(|| WorldError::AreaNotFound(scene.to_string()))?;

        if !area.connection_exists(connection_name) {
            return Err(WorldError::ConnectionNotFound {
                area: scene.to_string(),
                name: connection_name.to_string(),
            });
        }

        area.connections.retain(|c| c.name != connection_name);
        self.sync_passage_selectors();
        Ok(())
    }

    /// Swap a connection one slot towards the front of its area's list.
    pub fn move_connection_up(
        &mut self,
        scene: &str,
        connection_name: &str,
    ) -> Result<(), WorldError> {
        self.shift_connection(scene, connection_name, -1)
    }

    /// Swap a connection one slot towards the back of its area's list.
    pub fn move_connection_down(
        &mut self,
        scene: &str,
        connection_name: &str,
    ) -> Result<(), WorldError> {
        self.shift_connection(scene, connection_name, 1)
    }

    fn shift_connection(
        &mut self,
        scene: &str,
        connection_name: &str,
        offset: isize,
    ) -> Result<(), WorldError> {
        let area = self
            .area_mut(scene)
            .ok_or_else(|| WorldError::AreaNotFound(scene.to_string()))?;

        let index = area
            .connections
            .iter()
            .position(|c| c.name == connection_name)
            .ok_or_else(|| WorldError::ConnectionNotFound {
                area: scene.to_string(),
                name: connection_name.to_string(),
            })?;

        let new_index = index as isize + offset;
        if new_index >= 0 && (new_index as usize) < area.connections.len() {
            let connection = area.connections.remove(index);
            area.connections.insert(new_index as usize, connection);
        }

        self.sync_passage_selectors();
        Ok(())
    }

    /// Recompute every connection's passage options from its target area.
    ///
    /// An absent or connection-less target yields the single sentinel
    /// option; a selected value that survived keeps its selection, anything
    /// else collapses to the sentinel.
    pub fn sync_passage_selectors(&mut self) {
        // Snapshot of connection names per area; the mutation pass below
        // needs to look targets up while holding &mut on their sources.
        let names: Vec<(String, Vec<String>)> = self
            .areas
            .iter()
            .map(|a| (a.scene.clone(), a.connection_names()))
            .collect();

        for area in self.areas.iter_mut() {
            for connection in area.connections.iter_mut() {
                let options = connection
                    .target
                    .as_deref()
                    .and_then(|target| {
                        names
                            .iter()
                            .find(|(scene, _)| scene == target)
                            .map(|(_, names)| names.clone())
                    })
                    .filter(|names| !names.is_empty())
                    .unwrap_or_else(|| vec![NONE_VALUE.to_string()]);

                connection.passage.set_options(options);
            }
        }
    }
}
