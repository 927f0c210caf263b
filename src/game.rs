//! Game orchestration layer
//!
//! [`Game`] owns the scene graph, the single piece of mutable state, and the
//! input interpreter. [`Game::apply_input`] performs one transition step with
//! no I/O; the console loop in [`runtime`] wraps it with rendering and reading.

pub mod runtime;
pub mod state;

pub use runtime::{SessionEnd, SessionSummary};
pub use state::GameState;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::input::{InputAction, InputInterpreter};
use crate::scene::{Scene, SceneGraph};

/// Result of feeding one line of input to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The input matched a transition and the current scene changed
    Moved { from: String, to: String },
    /// The input matched nothing; state is unchanged
    InvalidChoice { input: String },
    /// The player entered the quit token
    Quit,
}

/// A single-player session over an immutable scene graph.
pub struct Game {
    graph: SceneGraph,
    state: GameState,
    interpreter: InputInterpreter,
    config: GameConfig,
}

impl Game {
    /// Create a game positioned at the graph's start scene.
    ///
    /// Fails if the configured quit token also names a transition somewhere in
    /// the graph, since that transition could never be taken.
    pub fn new(graph: SceneGraph, config: GameConfig) -> Result<Self> {
        let interpreter = InputInterpreter::new(config.quit_token.clone());

        if let Some(quit) = interpreter.quit_token() {
            let mut clashes: Vec<&str> = graph
                .iter()
                .filter(|scene| {
                    scene
                        .transitions()
                        .any(|(token, _)| token.eq_ignore_ascii_case(quit))
                })
                .map(Scene::id)
                .collect();
            clashes.sort_unstable();
            if let Some(scene) = clashes.first() {
                return Err(GameError::QuitTokenConflict {
                    token: quit.to_string(),
                    scene: (*scene).to_string(),
                });
            }
        }

        let state = GameState::new(graph.start_id());
        Ok(Self {
            graph,
            state,
            interpreter,
            config,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The scene the player is currently in.
    pub fn current_scene(&self) -> Result<&Scene> {
        self.graph.get_scene(self.state.current_scene_id())
    }

    /// Interpret one raw input line and apply it.
    pub fn apply_input(&mut self, raw: &str) -> Result<TurnOutcome> {
        let choice = match self.interpreter.interpret(raw) {
            InputAction::Quit => return Ok(TurnOutcome::Quit),
            InputAction::Choose(choice) => choice,
        };

        let scene = self.graph.get_scene(self.state.current_scene_id())?;
        match self.graph.resolve_transition(scene, &choice) {
            Some(target) => {
                let from = scene.id().to_string();
                let to = target.to_string();
                self.state.advance(to.clone());
                log::debug!("moved {from} -> {to} on '{choice}'");
                Ok(TurnOutcome::Moved { from, to })
            }
            None => {
                log::debug!(
                    "invalid choice '{choice}' in scene {}",
                    self.state.current_scene_id()
                );
                Ok(TurnOutcome::InvalidChoice { input: choice })
            }
        }
    }
}
