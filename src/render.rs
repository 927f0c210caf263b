//! Text rendering for the console game.
//!
//! Every function returns the exact text to write, newlines included, so the
//! game loop only has to forward it and tests can compare output verbatim.

use crate::scene::Scene;
use ratatui::crossterm::cursor::MoveTo;
use ratatui::crossterm::terminal::{Clear, ClearType};
use ratatui::crossterm::Command;

pub const TITLE: &str = "Welcome to the Mystery Room Adventure!";
pub const RULE: &str = "==================================";
pub const PROMPT: &str = "What would you like to do?";
pub const FAREWELL: &str = "Thanks for playing! Goodbye!";
pub const INTERRUPTED: &str = "Game interrupted. Thanks for playing!";

/// Banner printed once when the session starts.
pub fn banner(quit_token: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Enter the number of your choice at each prompt.\n");
    if let Some(token) = quit_token {
        out.push_str(&format!("Press '{token}' at any time to quit the game.\n"));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Scene block: blank line, description, blank line, prompt, one line per option.
pub fn scene(scene: &Scene) -> String {
    let mut out = format!("\n{}\n\n{PROMPT}\n", scene.description());
    for option in scene.options() {
        out.push_str(&format!("{}: {}\n", option.token, option.label));
    }
    out
}

pub fn invalid_choice(message: &str) -> String {
    format!("{message}\n")
}

pub fn farewell() -> String {
    format!("\n{FAREWELL}\n")
}

pub fn interrupted() -> String {
    format!("\n\n{INTERRUPTED}\n")
}

/// ANSI sequence that clears the terminal and homes the cursor.
pub fn clear_screen() -> String {
    let mut out = String::new();
    Clear(ClearType::All)
        .write_ansi(&mut out)
        .and_then(|_| MoveTo(0, 0).write_ansi(&mut out))
        .expect("writing ANSI into a String cannot fail");
    out
}
