use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for one game. Defaults match the classic 24×24 board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: u32,
    /// Pixel size of one cell on the logical canvas
    pub cell_size: u32,
    pub initial_length: usize,
    /// Points awarded per food
    pub score_increment: u32,
    pub initial_interval_ms: u32,
    /// Interval reduction per food eaten
    pub interval_step_ms: u32,
    pub min_interval_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 24,
            cell_size: 25,
            initial_length: 3,
            score_increment: 10,
            initial_interval_ms: 180,
            interval_step_ms: 2,
            min_interval_ms: 80,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file; missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Logical canvas edge in pixels
    pub fn canvas_size(&self) -> u32 {
        self.grid_size * self.cell_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_length == 0 {
            return Err(ConfigError::Invalid("initial_length must be at least 1".into()));
        }
        // the snake is laid out downwards from the midpoint
        let room = (self.grid_size - self.grid_size / 2) as usize;
        if self.grid_size == 0 || room < self.initial_length {
            return Err(ConfigError::Invalid(format!(
                "grid_size {} cannot fit a snake of length {}",
                self.grid_size, self.initial_length
            )));
        }
        if self.cell_size == 0 {
            return Err(ConfigError::Invalid("cell_size must be positive".into()));
        }
        if self.min_interval_ms == 0 {
            return Err(ConfigError::Invalid("min_interval_ms must be positive".into()));
        }
        if self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "min_interval_ms ({}) exceeds initial_interval_ms ({})",
                self.min_interval_ms, self.initial_interval_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 24);
        assert_eq!(config.canvas_size(), 600);
        assert_eq!(config.initial_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = GameConfig::default().with_grid_size(4);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(GameConfig::default().with_grid_size(6).validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_intervals() {
        let config = GameConfig {
            min_interval_ms: 200,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_size": 16, "score_increment": 5 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.score_increment, 5);
        assert_eq!(config.initial_interval_ms, 180);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Json(_))
        ));
    }
}
