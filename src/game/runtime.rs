//! Console loop driving a [`Game`].
//!
//! Generic over the reader and writer so the binary can hand in stdin/stdout
//! and tests can hand in byte buffers.

use super::{Game, TurnOutcome};
use crate::error::{GameError, Result};
use crate::render;
use std::fmt;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed the quit token
    Quit,
    /// The input stream closed
    EndOfInput,
    /// The shutdown future resolved (Ctrl-C in the binary)
    Interrupted,
}

/// Counters for one run of [`Game::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Lines read, including invalid ones and the quit command
    pub turns: u64,
    pub transitions: u64,
    pub invalid_choices: u64,
    pub final_scene: String,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} after {} turns ({} moves, {} invalid) in scene {}",
            self.end, self.turns, self.transitions, self.invalid_choices, self.final_scene
        )
    }
}

impl Game {
    /// Play until the player quits, input ends, or `shutdown` resolves.
    ///
    /// Prints the banner once, then for every turn the current scene, and
    /// reads one line. Invalid choices print the configured message and the
    /// same scene is shown again.
    pub async fn run<R, W, S>(
        &mut self,
        mut input: R,
        mut output: W,
        shutdown: S,
    ) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut turns = 0u64;
        let mut transitions = 0u64;
        let mut invalid_choices = 0u64;
        // Banner and invalid-choice messages stay visible; only scene changes clear
        let mut clear_next = false;
        let mut line = Vec::new();

        log::info!("session started in scene {}", self.state.current_scene_id());
        emit(&mut output, &render::banner(self.interpreter.quit_token())).await?;

        let end = loop {
            let mut block = String::new();
            if clear_next && self.config.clear_screen {
                block.push_str(&render::clear_screen());
            }
            block.push_str(&render::scene(self.current_scene()?));
            emit(&mut output, &block).await?;

            line.clear();
            let read = tokio::select! {
                read = input.read_until(b'\n', &mut line) => Some(read),
                _ = &mut shutdown => None,
            };

            match read {
                None => {
                    emit(&mut output, &render::interrupted()).await?;
                    break SessionEnd::Interrupted;
                }
                Some(Ok(0)) => {
                    emit(&mut output, &render::farewell()).await?;
                    break SessionEnd::EndOfInput;
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(GameError::io("failed to read player input", err)),
            }

            turns += 1;
            // Bytes that are not UTF-8 simply match no token
            let text = String::from_utf8_lossy(&line);
            match self.apply_input(&text)? {
                TurnOutcome::Moved { .. } => {
                    transitions += 1;
                    clear_next = true;
                }
                TurnOutcome::InvalidChoice { .. } => {
                    invalid_choices += 1;
                    clear_next = false;
                    let message = render::invalid_choice(&self.config.invalid_choice_message);
                    emit(&mut output, &message).await?;
                }
                TurnOutcome::Quit => {
                    emit(&mut output, &render::farewell()).await?;
                    break SessionEnd::Quit;
                }
            }
        };

        let summary = SessionSummary {
            end,
            turns,
            transitions,
            invalid_choices,
            final_scene: self.state.current_scene_id().to_string(),
        };
        log::info!("session ended: {summary}");
        Ok(summary)
    }
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
