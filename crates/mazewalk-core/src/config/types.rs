//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::walk::{DeadEndPolicy, RootSelection, WalkOptions};

/// Maze generation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Seed for the neighbor picker (random when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Walk engine configuration
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Walk engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WalkConfig {
    /// Step budget for a whole run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<u64>,

    #[serde(default)]
    pub dead_ends: DeadEndPolicy,

    #[serde(default)]
    pub root: RootSelection,
}

impl From<&WalkConfig> for WalkOptions {
    fn from(config: &WalkConfig) -> Self {
        WalkOptions {
            max_steps: config.max_steps,
            dead_ends: config.dead_ends,
            root: config.root,
        }
    }
}
