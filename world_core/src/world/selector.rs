// world_core/src/world/selector.rs
use serde::{Deserialize, Serialize};
use crate::constants::NONE_VALUE;

/// A value constrained to a dynamically recomputed set of option strings.
///
/// The chosen value survives option-list changes by value lookup, never by
/// index; a value whose referent disappears collapses to the sentinel.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PassageSelector {
    pub options: Vec<String>,
    pub value: String,
}

impl Default for PassageSelector {
    fn default() -> Self {
        Self {
            options: vec![NONE_VALUE.to_string()],
            value: NONE_VALUE.to_string(),
        }
    }
}

impl PassageSelector {
    pub fn new(options: Vec<String>) -> Self {
        let mut selector = Self::default();
        selector.set_options(options);
        selector
    }

    /// Replace the option list and reconcile the current value against it.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.value = reconcile(&self.value, &options);
        self.options = options;
    }

    /// Select `value` if it is a valid option. Returns whether it was.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o == value) {
            self.value = value.to_string();
            true
        } else {
            false
        }
    }

    /// True while the selector points at the sentinel.
    pub fn is_none(&self) -> bool {
        self.value == NONE_VALUE
    }

    /// True when there is nothing real to choose from.
    pub fn is_empty(&self) -> bool {
        self.options.iter().all(|o| o == NONE_VALUE)
    }
}

/// Keep `old_value` if it is still present in `options`, else the sentinel.
pub fn reconcile(old_value: &str, options: &[String]) -> String {
    if options.iter().any(|o| o == old_value) {
        old_value.to_string()
    } else {
        NONE_VALUE.to_string()
    }
}
