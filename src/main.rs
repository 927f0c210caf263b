//! mystery-room - Branching Text Adventure
//!
//! Plays the built-in Mystery Room story on stdin/stdout.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use mystery_room::{Game, GameConfig, GameError, SessionEnd};
#[cfg(feature = "config")]
use std::path::PathBuf;

fn main() -> Result<()> {
    // Logs go to stderr; RUST_LOG=debug shows every transition
    env_logger::init();

    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;

    let graph = mystery_room::scene::mystery_room().context("built-in story is malformed")?;
    let mut game = Game::new(graph, config).context("invalid game configuration")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(async {
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        let output = tokio::io::stdout();
        game.run(input, output, interrupt()).await
    });

    // An interrupted read may still be parked on stdin in the blocking pool
    runtime.shutdown_background();

    match result {
        Ok(summary) => {
            if summary.end == SessionEnd::Interrupted {
                log::info!("interrupted by signal");
            }
            Ok(())
        }
        Err(err) => {
            let context = abort_context(&err);
            log::error!("{context}: {err}");
            Err(err).context(context)
        }
    }
}

/// Headline for a fatal error: broken scene data or a console/environment fault.
fn abort_context(err: &GameError) -> &'static str {
    if err.is_graph_error() {
        "scene graph is malformed"
    } else {
        "game aborted"
    }
}

fn cli() -> Command {
    let command = Command::new("mystery-room")
        .version(mystery_room::VERSION)
        .about("A branching text adventure played from the terminal")
        .long_about(
            "Wake up in a mysterious room and explore it one numbered choice at a time. \
             Play ends when you enter the quit command, close the input, or press Ctrl-C.",
        )
        .arg(
            Arg::new("clear-screen")
                .long("clear-screen")
                .help("Clear the terminal before each new scene")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quit-token")
                .long("quit-token")
                .value_name("TOKEN")
                .help("Command that ends the game (default: q)"),
        )
        .arg(
            Arg::new("no-quit")
                .long("no-quit")
                .help("Disable the quit command")
                .action(ArgAction::SetTrue)
                .conflicts_with("quit-token"),
        );

    #[cfg(feature = "config")]
    let command = command.arg(
        Arg::new("config")
            .long("config")
            .value_name("PATH")
            .help("TOML file with game options")
            .value_parser(clap::value_parser!(PathBuf)),
    );

    command
}

/// Config file first, then command-line flags on top.
fn resolve_config(matches: &ArgMatches) -> Result<GameConfig> {
    #[cfg(feature = "config")]
    let mut config = {
        let explicit = matches.get_one::<PathBuf>("config");
        GameConfig::discover(explicit.map(PathBuf::as_path)).context("failed to load config")?
    };
    #[cfg(not(feature = "config"))]
    let mut config = GameConfig::default();

    if matches.get_flag("clear-screen") {
        config.clear_screen = true;
    }
    if let Some(token) = matches.get_one::<String>("quit-token") {
        if token.trim().is_empty() {
            anyhow::bail!("--quit-token must not be empty");
        }
        config.quit_token = Some(token.clone());
    }
    if matches.get_flag("no-quit") {
        config.quit_token = None;
    }

    Ok(config)
}

async fn interrupt() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!mystery_room::VERSION.is_empty());
    }

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let matches = cli()
            .try_get_matches_from(["mystery-room", "--clear-screen", "--quit-token", "x"])
            .unwrap();
        let config = resolve_config(&matches).unwrap();

        assert!(config.clear_screen);
        assert_eq!(config.quit_token.as_deref(), Some("x"));
    }

    #[test]
    fn no_quit_disables_quit() {
        let matches = cli()
            .try_get_matches_from(["mystery-room", "--no-quit"])
            .unwrap();
        assert_eq!(resolve_config(&matches).unwrap().quit_token, None);
    }

    #[test]
    fn abort_context_separates_graph_faults() {
        assert_eq!(
            abort_context(&GameError::missing_scene("cellar")),
            "scene graph is malformed"
        );

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(abort_context(&GameError::from(io)), "game aborted");
    }

    #[test]
    fn no_quit_conflicts_with_quit_token() {
        let result = cli().try_get_matches_from(["mystery-room", "--no-quit", "--quit-token", "x"]);
        assert!(result.is_err());
    }
}
