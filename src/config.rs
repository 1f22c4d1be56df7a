use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION};

/// Longest accepted end-of-game announcement delay.
pub const MAX_ANNOUNCE_DELAY_MS: u64 = 60_000;

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, ConfigError> {
        Board::new(self.width, self.height)
    }
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause between the final move and the end-of-game message.
    pub announce_delay_ms: u64,
    /// Input poll interval.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            announce_delay_ms: 1000,
            tick_ms: 100,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.board.width) {
            return Err(ConfigError::Validation(format!(
                "board.width must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if !range.contains(&self.board.height) {
            return Err(ConfigError::Validation(format!(
                "board.height must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if self.ui.announce_delay_ms > MAX_ANNOUNCE_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "ui.announce_delay_ms must be <= {MAX_ANNOUNCE_DELAY_MS}"
            )));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.width, 7);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.ui.announce_delay_ms, 1000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.width, 9);
        assert_eq!(config.board.height, 6);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_narrow_board() {
        let mut config = AppConfig::default();
        config.board.width = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_board() {
        let mut config = AppConfig::default();
        config.board.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.board.width = usize::MAX / 2;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.board.height = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_announce_delay() {
        let mut config = AppConfig::default();
        config.ui.announce_delay_ms = u64::MAX;
        assert!(config.validate().is_err());

        config.ui.announce_delay_ms = MAX_ANNOUNCE_DELAY_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.ui.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_config_builds_board() {
        let board = BoardConfig { width: 8, height: 5 }.build().unwrap();
        assert_eq!((board.width(), board.height()), (8, 5));
        assert!(BoardConfig { width: 2, height: 5 }.build().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
announce_delay_ms = 250
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.announce_delay_ms, 250);
        // Others are defaults
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nheight = 2\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[board\nwidth = ").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
