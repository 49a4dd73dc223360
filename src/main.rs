//! Profile Card driver
//!
//! Reads one command per line from stdin and prints the rendered layout tree
//! as a line of JSON after every command that changes what is on screen.
//!
//! ```text
//! profile | gallery | settings   select a tab
//! tap                            toggle the profile card
//! dark | light                   set the theme
//! back                           navigate back (exits at the start screen)
//! tick <ms>                      advance animations
//! render                         print the current tree
//! quit                           exit
//! ```
//!
//! An optional first argument names a JSON configuration file.

use anyhow::Context;
use app_core::{AppConfig, HttpImageFetcher, ImageLoader};
use app_ui::{AppShell, Route, UiAction};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// One line of driver input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Dispatch(UiAction),
    Tick(Duration),
    Render,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "tap" => Command::Dispatch(UiAction::ToggleProfileCard),
        "dark" => Command::Dispatch(UiAction::SetDarkTheme(true)),
        "light" => Command::Dispatch(UiAction::SetDarkTheme(false)),
        "back" => Command::Dispatch(UiAction::Back),
        "render" => Command::Render,
        "quit" | "exit" => Command::Quit,
        "tick" => {
            let ms = words
                .next()
                .ok_or_else(|| "tick needs a duration in milliseconds".to_string())?
                .parse::<u64>()
                .map_err(|e| format!("invalid tick duration: {}", e))?;
            Command::Tick(Duration::from_millis(ms))
        }
        other => match other.parse::<Route>() {
            Ok(route) => Command::Dispatch(UiAction::SelectTab(route)),
            Err(_) => return Err(format!("unknown command: {}", other)),
        },
    };

    match words.next() {
        Some(extra) => Err(format!("unexpected argument: {}", extra)),
        None => Ok(command),
    }
}

fn init_logging(fallback_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_tree(shell: &mut AppShell) -> anyhow::Result<()> {
    let json = serde_json::to_string(&shell.render()).context("serializing layout tree")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(&path)
            .await
            .with_context(|| format!("loading configuration from {}", path))?,
        None => AppConfig::default(),
    };

    init_logging(&config.log_filter);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        dark_theme = config.dark_theme,
        "Profile Card starting"
    );

    let fetcher = HttpImageFetcher::new().context("building HTTP client")?;
    let loader = ImageLoader::new(Arc::new(fetcher));
    let mut shell = AppShell::from_config(&config).with_image_loader(loader);
    print_tree(&mut shell)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "ignoring input");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Dispatch(UiAction::Back) => {
                if !shell.dispatch(UiAction::Back) {
                    info!("back at start destination, exiting");
                    break;
                }
                print_tree(&mut shell)?;
            }
            Command::Dispatch(action) => {
                if shell.dispatch(action) {
                    print_tree(&mut shell)?;
                }
            }
            Command::Tick(dt) => {
                let animating = shell.tick(dt);
                tracing::debug!(animating, "ticked");
                print_tree(&mut shell)?;
            }
            Command::Render => print_tree(&mut shell)?,
        }
    }

    info!("Profile Card exiting");
    Ok(())
}
