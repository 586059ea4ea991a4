// world_core/src/storage/config.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use directories_next::ProjectDirs;
use ron::from_str;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use crate::constants::*;

/// Runtime tuning of the area changer, persisted as .ron in the app dir.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransistorSettings {
    /// Transition used when the caller does not name one.
    pub default_transition: String,
    /// Load progress treated as "ready to activate".
    pub activation_threshold: f32,
    /// Real-time hold between readiness and activation.
    pub settle_delay: f32,
    /// Whether the orchestrator publishes load progress each tick.
    pub show_progress: bool,
    /// Run transition effects on the unscaled clock.
    pub real_time_animations: bool,
}

impl Default for TransistorSettings {
    fn default() -> Self {
        Self {
            default_transition: DEFAULT_TRANSITION.to_string(),
            activation_threshold: ACTIVATION_THRESHOLD,
            settle_delay: SETTLE_DELAY,
            show_progress: false,
            real_time_animations: false,
        }
    }
}

/// Returns the app_dir for the program.
pub fn app_dir() -> PathBuf {
    if let Some(project_dir) = ProjectDirs::from("com", "worldshaper", "runtime") {
        project_dir.config_dir().to_path_buf()
    } else {
        log::error!("Could not resolve app directory.");
        panic!("Could not resolve app directory.");
    }
}

fn settings_path() -> PathBuf {
    app_dir().join(SETTINGS_RON)
}

/// Load the settings .ron, falling back to defaults on a missing or
/// unreadable file.
pub fn load_settings() -> TransistorSettings {
    let path = settings_path();

    match fs::read_to_string(&path) {
        Ok(txt) => from_str(&txt).unwrap_or_default(),
        Err(e) => {
            log::warn!("No settings file loaded ({e}); using defaults.");
            TransistorSettings::default()
        }
    }
}

/// Saves the settings .ron file.
pub fn save_settings(settings: &TransistorSettings) -> Result<(), Box<dyn Error>> {
    let path = settings_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let ron = to_string_pretty(settings, PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}
