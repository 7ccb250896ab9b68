use std::path::PathBuf;

/// Errors that can occur when applying a move to the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("only Red or Yellow pieces can be dropped")]
    InvalidColor,

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 out of range (board has 7 columns)"
        );

        let err = MoveError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_game_over_error_display() {
        assert_eq!(MoveError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 1"
        );
    }
}
