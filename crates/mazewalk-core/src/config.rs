//! Maze configuration
//!
//! Configuration is read from a TOML file passed with `--config`:
//!
//! ```toml
//! seed = 42
//!
//! [walk]
//! max_steps = 1000000
//! dead_ends = "backtrack"
//! root = "first-loop"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MazeError, Result};
use crate::walk::WalkOptions;

pub use types::{MazeConfig, WalkConfig};

impl MazeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MazeError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: MazeConfig = toml::from_str(&content)?;
        if config.walk.max_steps == Some(0) {
            return Err(MazeError::invalid_value("walk.max_steps", 0));
        }
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MazeError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Walk options derived from the `[walk]` table
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::from(&self.walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{DeadEndPolicy, RootSelection};
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        fs::write(&path, "").unwrap();

        let config = MazeConfig::load(&path).unwrap();
        assert_eq!(config, MazeConfig::default());
        assert_eq!(config.walk_options(), WalkOptions::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        fs::write(
            &path,
            "seed = 42\n\n[walk]\nmax_steps = 500\ndead_ends = \"backtrack\"\nroot = \"first-node\"\n",
        )
        .unwrap();

        let config = MazeConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        let options = config.walk_options();
        assert_eq!(options.max_steps, Some(500));
        assert_eq!(options.dead_ends, DeadEndPolicy::Backtrack);
        assert_eq!(options.root, RootSelection::FirstNode);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        let config = MazeConfig {
            seed: Some(7),
            walk: WalkConfig {
                max_steps: None,
                dead_ends: DeadEndPolicy::Fail,
                root: RootSelection::FirstNode,
            },
        };
        config.save(&path).unwrap();

        assert_eq!(MazeConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        fs::write(&path, "[walk]\ndead_ends = \"sideways\"\n").unwrap();

        assert!(matches!(MazeConfig::load(&path), Err(MazeError::Toml(_))));
    }

    #[test]
    fn test_rejects_zero_budget() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.toml");
        fs::write(&path, "[walk]\nmax_steps = 0\n").unwrap();

        assert!(matches!(
            MazeConfig::load(&path),
            Err(MazeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = MazeConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
