// world_core/src/world/area_handle.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::world::connection::Connection;

/// A node in the world graph: one loadable scene plus its outgoing
/// connections, in authoring order. Index 0 is the default entry.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct AreaHandle {
    pub id: Uuid,
    /// Scene name/path. This is the handle's identity.
    pub scene: String,
    pub connections: Vec<Connection>,
}

impl AreaHandle {
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            scene: scene.into(),
            connections: Vec::new(),
        }
    }

    /// Linear lookup of a connection by its unique name.
    pub fn get_connection(&self, connection_name: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.name == connection_name)
    }

    pub fn get_connection_mut(&mut self, connection_name: &str) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|c| c.name == connection_name)
    }

    pub fn connection_exists(&self, connection_name: &str) -> bool {
        self.connections.iter().any(|c| c.name == connection_name)
    }

    pub fn has_connections(&self) -> bool {
        !self.connections.is_empty()
    }

    /// Ordered names of all connections.
    pub fn connection_names(&self) -> Vec<String> {
        self.connections.iter().map(|c| c.name.clone()).collect()
    }

    /// True when the named connection's selector points at `passage_name`.
    pub fn matching_passage(&self, connection_name: &str, passage_name: &str) -> bool {
        match self.get_connection(connection_name) {
            Some(connection) => connection.passage.value == passage_name,
            None => false,
        }
    }
}
