//! Scene and scene graph types.
//!
//! A [`Scene`] keeps its option labels and its transitions as two separate
//! tables keyed by the same tokens. [`SceneGraph::new`] checks that the two
//! agree and that every transition lands on a known scene, so lookups during
//! play never have to.

use crate::error::{GameError, Result};
use std::collections::{HashMap, HashSet};

/// One player-facing choice as displayed: `"<token>: <label>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneOption {
    pub token: String,
    pub label: String,
}

/// A node in the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    id: String,
    description: String,
    /// Display order is declaration order
    options: Vec<SceneOption>,
    transitions: HashMap<String, String>,
}

impl Scene {
    /// Build a scene from `(token, label)` options and `(token, destination)` transitions.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        options: &[(&str, &str)],
        transitions: &[(&str, &str)],
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            options: options
                .iter()
                .map(|(token, label)| SceneOption {
                    token: (*token).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
            transitions: transitions
                .iter()
                .map(|(token, target)| ((*token).to_string(), (*target).to_string()))
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn options(&self) -> &[SceneOption] {
        &self.options
    }

    /// Destination for `token`, if this scene has an edge for it
    pub fn transition(&self, token: &str) -> Option<&str> {
        self.transitions.get(token).map(String::as_str)
    }

    /// Iterate over `(token, destination)` pairs in no particular order
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.transitions
            .iter()
            .map(|(token, target)| (token.as_str(), target.as_str()))
    }
}

/// Immutable mapping from scene identifier to [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneGraph {
    start: String,
    scenes: HashMap<String, Scene>,
}

impl SceneGraph {
    /// Build and validate a graph.
    ///
    /// Rejects, in this order of discovery per scene:
    /// - duplicate scene identifiers
    /// - duplicate option tokens inside one scene
    /// - options with no matching transition
    /// - transitions to scenes that are not in the graph
    ///
    /// and finally a missing `start` scene. Reachability and dead ends are not
    /// checked.
    pub fn new(start: impl Into<String>, scenes: impl IntoIterator<Item = Scene>) -> Result<Self> {
        let start = start.into();
        let mut by_id = HashMap::new();

        for scene in scenes {
            if by_id.contains_key(scene.id()) {
                return Err(GameError::DuplicateScene {
                    id: scene.id().to_string(),
                });
            }
            by_id.insert(scene.id().to_string(), scene);
        }

        let graph = Self {
            start,
            scenes: by_id,
        };
        graph.validate()?;
        Ok(graph)
    }

    fn validate(&self) -> Result<()> {
        // Sorted so the reported error does not depend on hash order
        let mut ids: Vec<&String> = self.scenes.keys().collect();
        ids.sort();

        for id in ids {
            let scene = &self.scenes[id];

            let mut seen = HashSet::new();
            for option in scene.options() {
                if !seen.insert(option.token.as_str()) {
                    return Err(GameError::DuplicateOption {
                        scene: id.clone(),
                        token: option.token.clone(),
                    });
                }
                if scene.transition(&option.token).is_none() {
                    return Err(GameError::OptionWithoutTransition {
                        scene: id.clone(),
                        token: option.token.clone(),
                    });
                }
            }

            let mut edges: Vec<(&str, &str)> = scene.transitions().collect();
            edges.sort();
            for (token, target) in edges {
                if !self.scenes.contains_key(target) {
                    return Err(GameError::DanglingTransition {
                        scene: id.clone(),
                        token: token.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        if !self.scenes.contains_key(&self.start) {
            return Err(GameError::MissingStartScene {
                id: self.start.clone(),
            });
        }

        Ok(())
    }

    /// Identifier of the scene a new session starts in
    pub fn start_id(&self) -> &str {
        &self.start
    }

    /// Look up a scene by identifier.
    ///
    /// A miss means the graph or the caller is broken; player input never
    /// produces one.
    pub fn get_scene(&self, id: &str) -> Result<&Scene> {
        self.scenes
            .get(id)
            .ok_or_else(|| GameError::missing_scene(id))
    }

    /// Destination of `token` from `scene`, or `None` if the scene has no such edge.
    pub fn resolve_transition<'a>(&self, scene: &'a Scene, token: &str) -> Option<&'a str> {
        scene.transition(token)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }
}
