//! pimon — a Raspberry Pi system monitor for the terminal.
//!
//! Polls CPU usage, memory usage and CPU temperature once per second, keeps
//! an hour of history and exports it to CSV on demand.
//!
//! Run with:  `RUST_LOG=info pimon`
//! Commands on stdin:  `p` pause/resume · `s [path]` save CSV · `q` quit.

mod console;
mod input;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("pimon v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = pimon_config::default_path();
    let config = pimon_config::load(&config_path).unwrap_or_else(|e| {
        tracing::warn!("{e}; using defaults");
        pimon_config::MonitorConfig::default()
    });

    let theme = pimon_theme::Theme::from_config(&config.theme);
    let display = console::Console::new(theme);
    let source = pimon_system::SystemMetrics::new();
    let commands = input::spawn_reader();

    pimon_session::run(config, config_path, source, display, commands)
        .await
        .map_err(Into::into)
}
