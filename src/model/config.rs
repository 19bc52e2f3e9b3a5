use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ops::view::ViewMode;

/// Configuration from taskgrid.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View used when none is requested explicitly
    #[serde(default)]
    pub mode: ViewMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Keyed by criticality label (`High`, `Medium`, `Low`)
    #[serde(default)]
    pub criticality_colors: HashMap<String, String>,
    /// Keyed by compliance label (`Compliant`, `Non-Compliant`, `Pending`)
    #[serde(default)]
    pub compliance_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            criticality_colors: HashMap::new(),
            compliance_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
