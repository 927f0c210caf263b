//! Error types and handling infrastructure for mystery-room.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these in `anyhow` for context.
//!
//! Almost every variant describes a malformed scene graph or configuration. An
//! unrecognised choice typed by the player is not an error: the game loop
//! reports it and re-prompts.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for mystery-room operations.
#[derive(Error, Debug)]
pub enum GameError {
    /// A scene identifier was looked up but is not part of the graph
    #[error("Scene not found: {id}")]
    MissingScene { id: String },

    /// The graph has no scene under the designated starting identifier
    #[error("Starting scene '{id}' is not defined")]
    MissingStartScene { id: String },

    /// Two scenes were declared with the same identifier
    #[error("Scene '{id}' is defined more than once")]
    DuplicateScene { id: String },

    /// One scene lists the same option token twice
    #[error("Scene '{scene}' lists option '{token}' more than once")]
    DuplicateOption { scene: String, token: String },

    /// An option is shown to the player but selecting it leads nowhere
    #[error("Scene '{scene}' offers option '{token}' without a transition")]
    OptionWithoutTransition { scene: String, token: String },

    /// A transition points at a scene that does not exist
    #[error("Scene '{scene}' option '{token}' leads to unknown scene '{target}'")]
    DanglingTransition {
        scene: String,
        token: String,
        target: String,
    },

    /// The quit command shadows an option token of some scene
    #[error("Quit token '{token}' collides with an option of scene '{scene}'")]
    QuitTokenConflict { token: String, scene: String },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Reading player input or writing game output failed
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for mystery-room operations.
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Create a MissingScene error for the given identifier
    pub fn missing_scene(id: impl Into<String>) -> Self {
        Self::MissingScene { id: id.into() }
    }

    /// Create a Config error with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a Config error tied to a specific file
    pub fn config_file(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// True for errors caused by malformed scene data rather than the environment
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            Self::MissingScene { .. }
                | Self::MissingStartScene { .. }
                | Self::DuplicateScene { .. }
                | Self::DuplicateOption { .. }
                | Self::OptionWithoutTransition { .. }
                | Self::DanglingTransition { .. }
        )
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::InvalidData => Self::Io {
                message: "Input was not valid UTF-8".to_string(),
                source: err,
            },
            std::io::ErrorKind::BrokenPipe => Self::Io {
                message: "Output closed".to_string(),
                source: err,
            },
            _ => Self::Io {
                message: "Console I/O failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let missing = GameError::missing_scene("attic");
        assert_eq!(missing.to_string(), "Scene not found: attic");

        let dangling = GameError::DanglingTransition {
            scene: "start".to_string(),
            token: "4".to_string(),
            target: "cellar".to_string(),
        };
        assert_eq!(
            dangling.to_string(),
            "Scene 'start' option '4' leads to unknown scene 'cellar'"
        );

        let config = GameError::config("quit token must not be empty");
        assert_eq!(
            config.to_string(),
            "Configuration error: quit token must not be empty"
        );
    }

    #[test]
    fn test_graph_error_classification() {
        assert!(GameError::missing_scene("x").is_graph_error());
        assert!(GameError::MissingStartScene {
            id: "start".to_string()
        }
        .is_graph_error());
        assert!(!GameError::config("bad").is_graph_error());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!GameError::io("read failed", io).is_graph_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let game_err: GameError = io_err.into();

        match game_err {
            GameError::Io { message, .. } => {
                assert_eq!(message, "Input was not valid UTF-8");
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_config_file_keeps_path() {
        let err = GameError::config_file("unreadable", "/tmp/missing.toml");
        match err {
            GameError::Config { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/missing.toml")));
            }
            _ => panic!("Expected Config variant"),
        }
    }
}
