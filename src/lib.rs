//! # mystery-room - Branching Text Adventure
//!
//! A small interactive-fiction game played on the console. The player reads a
//! scene, types the number of an option, and moves through a fixed graph of
//! scenes.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`scene`] - Scene graph types, load-time validation, and the built-in story
//! - [`input`] - Line normalisation and the quit command
//! - [`render`] - Exact console text for banner, scenes, and messages
//! - [`config`] - Session options, optionally loaded from TOML
//! - [`game`] - Game state, the transition step, and the console loop

// Core modules
pub mod config;
pub mod error;
pub mod scene;

// Console I/O
pub mod input;
pub mod render;

// Orchestration
pub mod game;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Game, GameState, SessionEnd, SessionSummary, TurnOutcome};
pub use scene::{Scene, SceneGraph, SceneOption};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
