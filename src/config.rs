use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_CONNECT, DEFAULT_ROWS};

/// Board dimensions and win condition.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            connect: DEFAULT_CONNECT,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be >= 1".into()));
        }
        if self.board.connect < 2 {
            return Err(ConfigError::Validation("board.connect must be >= 2".into()));
        }
        if self.board.connect > self.board.rows.max(self.board.cols) {
            return Err(ConfigError::Validation(
                "board.connect must fit within the board dimensions".into(),
            ));
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
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.connect, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        // Other fields should be defaults
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.connect, 4);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_connect_of_one() {
        let mut config = AppConfig::default();
        config.board.connect = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_connect() {
        let mut config = AppConfig::default();
        config.board.connect = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connect_bounded_by_longer_side() {
        // 7 columns can hold a horizontal line of 7 even with only 6 rows
        let mut config = AppConfig::default();
        config.board.connect = 7;
        config.validate().expect("connect of 7 fits on 7 columns");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board.rows, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 10
cols = 10
connect = 5
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board.rows, 10);
        assert_eq!(config.board.cols, 10);
        assert_eq!(config.board.connect, 5);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[board]\nconnect = 1\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
