// world_core/src/constants.rs

/// Sentinel passage-selector value for an unlinked connection.
pub const NONE_VALUE: &str = "None";

/// Transition animation used when the caller does not name one.
pub const DEFAULT_TRANSITION: &str = "CrossFade";

/// Load progress at which the engine considers a scene ready to activate.
pub const ACTIVATION_THRESHOLD: f32 = 0.9;

/// Real-time delay between readiness and activation.
/// Guards against one-frame progress-bar flicker.
pub const SETTLE_DELAY: f32 = 1.0;

/// Default duration of the bundled transition effects, in seconds.
pub const DEFAULT_TRANSITION_DURATION: f32 = 1.0;

/// Name of the world graph .ron save file.
pub const GRAPH_RON: &str = "world_graph.ron";

/// Name of the runtime settings .ron file.
pub const SETTINGS_RON: &str = "transistor_settings.ron";
