//! Player input interpretation.
//!
//! Turns one raw line from the console into an [`InputAction`] the game loop
//! consumes. The only normalisation is trimming surrounding whitespace,
//! including the line terminator.

/// High-level actions produced from one line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// A candidate option token, already trimmed. It may or may not be valid
    /// for the current scene.
    Choose(String),
    /// The player asked to leave the game.
    Quit,
}

/// Strip leading and trailing whitespace, line terminator included.
pub fn normalize(raw: &str) -> &str {
    raw.trim()
}

/// Maps raw lines to [`InputAction`]s.
#[derive(Debug, Clone, Default)]
pub struct InputInterpreter {
    quit_token: Option<String>,
}

impl InputInterpreter {
    /// `quit_token` of `None` disables the quit command.
    pub fn new(quit_token: Option<String>) -> Self {
        Self {
            quit_token: quit_token.map(|token| token.trim().to_string()),
        }
    }

    pub fn quit_token(&self) -> Option<&str> {
        self.quit_token.as_deref()
    }

    pub fn interpret(&self, raw: &str) -> InputAction {
        let choice = normalize(raw);

        match &self.quit_token {
            Some(quit) if choice.eq_ignore_ascii_case(quit) => InputAction::Quit,
            _ => InputAction::Choose(choice.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_line_terminators_and_padding() {
        assert_eq!(normalize("1\n"), "1");
        assert_eq!(normalize("  2\r\n"), "2");
        assert_eq!(normalize("\t3 \t"), "3");
        assert_eq!(normalize("\n"), "");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(normalize(" 1 2 \n"), "1 2");
    }

    #[test]
    fn quit_is_case_insensitive() {
        let interpreter = InputInterpreter::new(Some("q".to_string()));

        assert_eq!(interpreter.interpret("q\n"), InputAction::Quit);
        assert_eq!(interpreter.interpret("  Q  \n"), InputAction::Quit);
        assert_eq!(
            interpreter.interpret("quit\n"),
            InputAction::Choose("quit".to_string())
        );
    }

    #[test]
    fn disabled_quit_passes_token_through() {
        let interpreter = InputInterpreter::new(None);

        assert_eq!(interpreter.quit_token(), None);
        assert_eq!(
            interpreter.interpret("q\n"),
            InputAction::Choose("q".to_string())
        );
    }

    #[test]
    fn quit_token_itself_is_trimmed() {
        let interpreter = InputInterpreter::new(Some(" exit ".to_string()));

        assert_eq!(interpreter.quit_token(), Some("exit"));
        assert_eq!(interpreter.interpret("EXIT\n"), InputAction::Quit);
    }

    proptest! {
        #[test]
        fn padded_input_matches_trimmed(
            left in "[ \t]{0,4}",
            token in "[0-9]{1,2}",
            right in "[ \t\r]{0,4}\n?",
        ) {
            let interpreter = InputInterpreter::new(Some("q".to_string()));
            let padded = format!("{left}{token}{right}");

            prop_assert_eq!(interpreter.interpret(&padded), interpreter.interpret(&token));
            prop_assert_eq!(interpreter.interpret(&padded), InputAction::Choose(token.clone()));
        }
    }
}
