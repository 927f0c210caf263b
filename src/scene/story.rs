//! The built-in "Mystery Room" story.

use super::graph::{Scene, SceneGraph};
use super::START_SCENE;
use crate::error::Result;

/// Build the Mystery Room scene graph.
pub fn mystery_room() -> Result<SceneGraph> {
    SceneGraph::new(START_SCENE, scenes())
}

fn scenes() -> Vec<Scene> {
    vec![
        Scene::new(
            START_SCENE,
            "You wake up in a mysterious room. The walls are made of cold stone, and there's a dim \
             light coming from somewhere above. You notice two doors: one wooden and one metal.",
            &[
                ("1", "Try the wooden door"),
                ("2", "Try the metal door"),
                ("3", "Look around more carefully"),
            ],
            &[("1", "wooden_door"), ("2", "metal_door"), ("3", "look_around")],
        ),
        Scene::new(
            "wooden_door",
            "The wooden door creaks open to reveal a cozy library. Shelves of ancient books line \
             the walls, and a comfortable armchair sits in the corner.",
            &[
                ("1", "Examine the books"),
                ("2", "Sit in the armchair"),
                ("3", "Go back"),
            ],
            &[("1", "examine_books"), ("2", "sit_armchair"), ("3", START_SCENE)],
        ),
        Scene::new(
            "metal_door",
            "The metal door leads to a high-tech laboratory. Strange machines blink and hum all \
             around you.",
            &[
                ("1", "Investigate the machines"),
                ("2", "Look for a computer"),
                ("3", "Go back"),
            ],
            &[
                ("1", "investigate_machines"),
                ("2", "find_computer"),
                ("3", START_SCENE),
            ],
        ),
        Scene::new(
            "look_around",
            "As you look more carefully, you notice a small note on the floor and strange symbols \
             carved into the walls.",
            &[
                ("1", "Read the note"),
                ("2", "Study the symbols"),
                ("3", "Go back"),
            ],
            &[("1", "read_note"), ("2", "study_symbols"), ("3", START_SCENE)],
        ),
        Scene::new(
            "examine_books",
            "You find a mysterious book about parallel universes. It seems to contain important \
             information.",
            &[("1", "Go back to the library")],
            &[("1", "wooden_door")],
        ),
        Scene::new(
            "sit_armchair",
            "As you sit in the armchair, you feel strangely at peace. Maybe this is a good place \
             to rest...",
            &[("1", "Go back to the library")],
            &[("1", "wooden_door")],
        ),
        Scene::new(
            "investigate_machines",
            "The machines appear to be some sort of interdimensional travel devices. Best not to \
             touch anything.",
            &[("1", "Return to the laboratory")],
            &[("1", "metal_door")],
        ),
        Scene::new(
            "find_computer",
            "You find a computer with strange calculations on the screen. It seems to be running \
             some kind of simulation.",
            &[("1", "Return to the laboratory")],
            &[("1", "metal_door")],
        ),
        Scene::new(
            "read_note",
            "The note reads: 'Reality is not what it seems. Choose wisely.'",
            &[("1", "Go back")],
            &[("1", "look_around")],
        ),
        Scene::new(
            "study_symbols",
            "The symbols appear to be an ancient script, but their meaning remains a mystery.",
            &[("1", "Go back")],
            &[("1", "look_around")],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_builds() {
        let graph = mystery_room().unwrap();
        assert_eq!(graph.len(), 10);
        assert_eq!(graph.start_id(), "start");
    }

    #[test]
    fn every_option_leads_to_an_existing_scene() {
        let graph = mystery_room().unwrap();

        for scene in graph.iter() {
            assert!(!scene.options().is_empty(), "{} has no options", scene.id());
            for option in scene.options() {
                let target = graph
                    .resolve_transition(scene, &option.token)
                    .unwrap_or_else(|| panic!("{}:{} has no transition", scene.id(), option.token));
                assert!(graph.contains(target), "{} -> {target}", scene.id());
            }
        }
    }

    #[test]
    fn start_scene_branches() {
        let graph = mystery_room().unwrap();
        let start = graph.get_scene("start").unwrap();

        assert_eq!(graph.resolve_transition(start, "1"), Some("wooden_door"));
        assert_eq!(graph.resolve_transition(start, "2"), Some("metal_door"));
        assert_eq!(graph.resolve_transition(start, "3"), Some("look_around"));
        assert_eq!(graph.resolve_transition(start, "9"), None);
    }

    #[test]
    fn leaf_scenes_lead_back() {
        let graph = mystery_room().unwrap();
        let expected = [
            ("examine_books", "wooden_door"),
            ("sit_armchair", "wooden_door"),
            ("investigate_machines", "metal_door"),
            ("find_computer", "metal_door"),
            ("read_note", "look_around"),
            ("study_symbols", "look_around"),
        ];

        for (leaf, parent) in expected {
            let scene = graph.get_scene(leaf).unwrap();
            let tokens: Vec<&str> = scene.options().iter().map(|o| o.token.as_str()).collect();
            assert_eq!(tokens, vec!["1"], "{leaf}");
            assert_eq!(graph.resolve_transition(scene, "1"), Some(parent), "{leaf}");
        }
    }

    #[test]
    fn room_scenes_go_back_to_start() {
        let graph = mystery_room().unwrap();

        for room in ["wooden_door", "metal_door", "look_around"] {
            let scene = graph.get_scene(room).unwrap();
            assert_eq!(graph.resolve_transition(scene, "3"), Some("start"), "{room}");
            assert_eq!(scene.options()[2].label, "Go back");
        }
    }
}
