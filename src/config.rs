use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    board::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    error::Result,
};

/// Startup settings for a [`crate::simulation::Simulation`], stored as RON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// Milliseconds between ticks.
    pub interval_ms: u64,
    pub auto_update: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            interval_ms: 500,
            auto_update: true,
        }
    }
}

impl SimulationConfig {
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
