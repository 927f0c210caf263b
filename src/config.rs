//! Runtime options for a game session.
//!
//! Defaults reproduce the plain console game. With the `config` feature the
//! options can also be read from a TOML file such as:
//!
//! ```toml
//! clear_screen = true
//! quit_token = "x"
//! invalid_choice_message = "Nothing happens."
//! ```

#[cfg(feature = "config")]
use crate::error::{GameError, Result};
#[cfg(feature = "config")]
use std::path::{Path, PathBuf};

pub const DEFAULT_QUIT_TOKEN: &str = "q";
pub const DEFAULT_INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";

/// Options that shape presentation and the quit command. They never alter the
/// scene graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    /// Clear the terminal before drawing each scene
    pub clear_screen: bool,

    /// Command that ends the session; `None` disables quitting from the prompt
    pub quit_token: Option<String>,

    pub invalid_choice_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clear_screen: false,
            quit_token: Some(DEFAULT_QUIT_TOKEN.to_string()),
            invalid_choice_message: DEFAULT_INVALID_CHOICE_MESSAGE.to_string(),
        }
    }
}

#[cfg(feature = "config")]
impl GameConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| GameError::config(format!("invalid TOML: {e}")))?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GameError::config_file(format!("cannot read {}: {e}", path.display()), path))?;
        Self::from_toml_str(&text).map_err(|err| match err {
            GameError::Config { message, .. } => GameError::config_file(message, path),
            other => other,
        })
    }

    /// Load from an explicit path, else from the per-user default location if
    /// a file exists there, else fall back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/mystery-room/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mystery-room").join("config.toml"))
    }

    fn check(&self) -> Result<()> {
        if let Some(token) = &self.quit_token {
            if token.trim().is_empty() {
                return Err(GameError::config("quit_token must not be empty"));
            }
        }
        Ok(())
    }
}
