use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default for TUI mode. Pass `--log-file` or set
/// the `ELMTUI_LOG` env var to a file path to enable logging.
pub fn init_tracing(log_file: Option<&Path>) {
    let Some(path) = log_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ELMTUI_LOG").ok().map(PathBuf::from))
    else {
        // No logging configured - skip initialization entirely
        // This is the default for TUI mode to avoid corrupting the display
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
