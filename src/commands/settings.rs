//! Run settings: config file merged with command-line overrides

use tracing::debug;

use crate::cli::Cli;
use mazewalk_core::bail_invalid;
use mazewalk_core::config::MazeConfig;
use mazewalk_core::error::Result;
use mazewalk_core::walk::WalkOptions;

/// Seed and walk options for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: u64,
    pub options: WalkOptions,
}

impl RunSettings {
    /// Flags win over the config file; an absent seed is drawn at random
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };

        let mut options = config.walk_options();
        if let Some(max_steps) = cli.max_steps {
            if max_steps == 0 {
                bail_invalid!("--max-steps", 0);
            }
            options.max_steps = Some(max_steps);
        }
        if let Some(dead_ends) = cli.dead_ends {
            options.dead_ends = dead_ends;
        }
        if let Some(root) = cli.root {
            options.root = root;
        }

        let seed = cli
            .seed
            .or(config.seed)
            .unwrap_or_else(rand::random::<u64>);

        debug!(seed, ?options, "resolved run settings");
        Ok(RunSettings { seed, options })
    }
}
