// world_core/src/world/connection.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::world::selector::PassageSelector;

/// A named outgoing edge from one area to a passage on another area.
///
/// The target is referenced by scene name; ownership stays with the
/// registry. The passage selector picks which of the target's connections
/// this edge arrives through.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Connection {
    pub id: Uuid,
    /// Unique key within the owning area.
    pub name: String,
    /// Scene name of the target area, if linked.
    pub target: Option<String>,
    pub passage: PassageSelector,
}

impl Connection {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target: Some(target.into()),
            passage: PassageSelector::default(),
        }
    }

    /// An edge with no destination yet.
    pub fn unlinked(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target: None,
            passage: PassageSelector::default(),
        }
    }
}
