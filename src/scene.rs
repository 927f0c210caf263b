//! Scene graph: the fixed set of scenes and the edges between them.
//!
//! The graph is built once at start-up, validated, and only read afterwards.

pub mod graph;
pub mod story;

pub use graph::{Scene, SceneGraph, SceneOption};
pub use story::mystery_room;

/// Identifier of the scene every session starts in.
pub const START_SCENE: &str = "start";
