//! The one piece of state that changes during play.

/// Where the player currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_scene_id: String,
}

impl GameState {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current_scene_id: start.into(),
        }
    }

    pub fn current_scene_id(&self) -> &str {
        &self.current_scene_id
    }

    /// Move to `scene_id`. Only called after a transition resolved.
    pub(crate) fn advance(&mut self, scene_id: String) {
        self.current_scene_id = scene_id;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::scene::START_SCENE)
    }
}
