use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Position;

/// Errors raised while loading or checking a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIZE: i32 = 256;

/// Largest accepted tile side, in pixels
pub const MAX_TILE_SIZE: i32 = 256;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board, in cells
    pub board_size: i32,
    /// Size of one cell on the drawing surface, in pixels
    pub tile_size: i32,
    /// Tick interval at the start of a game
    pub initial_tick_ms: u64,
    /// How much faster the game gets per food eaten
    pub speed_step_ms: u64,
    /// Fastest allowed tick interval
    pub min_tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 20,
            tile_size: 20,
            initial_tick_ms: 200,
            speed_step_ms: 5,
            min_tick_ms: 50,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_size: i32) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Load a configuration from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges; a valid config keeps all pixel arithmetic in `i32`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(4..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Invalid(format!(
                "board_size must be between 4 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if !(3..=MAX_TILE_SIZE).contains(&self.tile_size) {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be between 3 and {}, got {}",
                MAX_TILE_SIZE, self.tile_size
            )));
        }
        if self.min_tick_ms == 0 {
            return Err(ConfigError::Invalid("min_tick_ms must be positive".into()));
        }
        if self.initial_tick_ms < self.min_tick_ms {
            return Err(ConfigError::Invalid(format!(
                "initial_tick_ms ({}) is below min_tick_ms ({})",
                self.initial_tick_ms, self.min_tick_ms
            )));
        }
        Ok(())
    }

    /// Where a new snake starts
    pub fn start_position(&self) -> Position {
        Position::new(self.board_size / 2, self.board_size / 2)
    }

    /// Tick interval after one more food, never below the floor
    pub fn faster(&self, tick_ms: u64) -> u64 {
        tick_ms.saturating_sub(self.speed_step_ms).max(self.min_tick_ms)
    }

    /// Side of a drawn square; two pixels short of the tile to leave a gap
    pub fn square_size(&self) -> i32 {
        self.tile_size - 2
    }

    /// Side of the whole drawing surface in pixels
    pub fn surface_size(&self) -> i32 {
        self.board_size * self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.initial_tick_ms, 200);
        assert_eq!(config.min_tick_ms, 50);
        assert_eq!(config.start_position(), Position::new(10, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15);
        assert_eq!(config.board_size, 15);
        assert_eq!(config.tile_size, 20);
    }

    #[test]
    fn test_faster_is_floored() {
        let config = GameConfig::default();
        assert_eq!(config.faster(200), 195);
        assert_eq!(config.faster(54), 50);
        assert_eq!(config.faster(50), 50);
        assert_eq!(config.faster(3), 50);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(GameConfig::new(2).validate().is_err());

        let config = GameConfig {
            initial_tick_ms: 40,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = GameConfig {
            min_tick_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board_and_tiles() {
        assert!(matches!(
            GameConfig::new(200_000_000).validate(),
            Err(ConfigError::Invalid(_))
        ));
        assert!(GameConfig::new(MAX_BOARD_SIZE + 1).validate().is_err());

        let config = GameConfig {
            tile_size: i32::MAX / 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // The largest accepted config still has a representable surface
        let config = GameConfig {
            board_size: MAX_BOARD_SIZE,
            tile_size: MAX_TILE_SIZE,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.surface_size(), MAX_BOARD_SIZE * MAX_TILE_SIZE);
    }

    #[test]
    fn test_load_rejects_oversized_board() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 100000").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_partial_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 12\ninitial_tick_ms = 150").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.initial_tick_ms, 150);
        assert_eq!(config.speed_step_ms, 5);
    }

    #[test]
    fn test_load_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board_size = \"big\"").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            GameConfig::load(&missing),
            Err(ConfigError::Read { .. })
        ));
    }
}
