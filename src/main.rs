use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use elmtui::config::Config;
use elmtui::trace::init_tracing;
use elmtui::ui;
use elmtui::ui::app::Screen;

/// Elm-style MVU sample apps for the terminal.
#[derive(Debug, Parser)]
#[command(name = "elmtui", version, about)]
struct Args {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output to this file (off by default in TUI mode).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Sample screen to start on.
    #[arg(long, value_enum, default_value_t = StartScreen::Counter)]
    screen: StartScreen,

    /// Override the UI tick rate in milliseconds.
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StartScreen {
    Counter,
    Finder,
}

impl From<StartScreen> for Screen {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Counter => Screen::Counter,
            StartScreen::Finder => Screen::Finder,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref());

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(tick_rate_ms) = args.tick_rate_ms {
        config.ui.tick_rate_ms = tick_rate_ms;
        config.validate()?;
    }

    ui::run(config, args.screen.into()).await?;
    Ok(())
}
