// world_core/src/error.rs
use thiserror::Error;

/// Configuration and load failures surfaced by the world subsystem.
///
/// None of these are fatal: callers log them and stay on the current scene.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("area '{0}' was not found in the registry")]
    AreaNotFound(String),

    #[error("area index {0} is out of range")]
    AreaIndexOutOfRange(usize),

    #[error("connection '{name}' does not exist on area '{area}'")]
    ConnectionNotFound { area: String, name: String },

    #[error("connection index {index} is out of range for area '{area}'")]
    ConnectionIndexOutOfRange { area: String, index: usize },

    #[error("a connection named '{name}' already exists on area '{area}'")]
    DuplicateConnection { area: String, name: String },

    #[error("no transition animation named '{0}' is registered")]
    TransitionNotFound(String),

    #[error("failed to begin loading scene '{scene}': {reason}")]
    LoadFailed { scene: String, reason: String },
}
