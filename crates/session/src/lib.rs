//! Monitoring session and the timer-driven loop around it.
//!
//! Wires together the pieces the binary hands in:
//! - interval ticker (1 s by default) → sample/append/render step
//! - user command channel → pause, export, shutdown
//! - config file watcher → live threshold reload

pub mod session;

pub use session::MonitorSession;

use pimon_config::{ExportConfig, MonitorConfig};
use pimon_core::{Message, MetricSource, MonitorDisplay, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, warn};

/// Drive a [`MonitorSession`] until shutdown.
///
/// The tick timer keeps firing while paused; the pause gate lives inside
/// [`MonitorSession::tick`], so missed work is skipped, never backfilled.
pub async fn run<S, D>(
    config: MonitorConfig,
    config_path: PathBuf,
    source: S,
    mut display: D,
    mut commands: mpsc::Receiver<Message>,
) -> Result<()>
where
    S: MetricSource,
    D: MonitorDisplay,
{
    let mut session = MonitorSession::new(source, &config);
    let mut export_cfg = config.export.clone();

    let mut ticker = time::interval(Duration::from_millis(config.sampling.interval_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut reloads = pimon_config::watch(&config_path);

    info!(
        "monitoring every {} ms, keeping {} samples",
        config.sampling.interval_ms, config.sampling.history
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => session.tick(&mut display),

            Some(msg) = commands.recv() => {
                if handle_message(msg, &mut session, &mut export_cfg, &config_path) {
                    return Ok(());
                }
            }

            Some(()) = reloads.recv() => {
                handle_message(Message::ConfigReloaded, &mut session, &mut export_cfg, &config_path);
            }

            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received; shutting down");
                return Ok(());
            }
        }
    }
}

/// Handle one session message. Returns `true` when the loop should exit.
///
/// Export failures are reported here and never bubble up — a failed save
/// must not stop the sampling loop.
fn handle_message<S: MetricSource>(
    msg: Message,
    session: &mut MonitorSession<S>,
    export_cfg: &mut ExportConfig,
    config_path: &Path,
) -> bool {
    match msg {
        Message::PauseToggled => {
            let paused = session.toggle_pause();
            info!("sampling {}", if paused { "paused" } else { "resumed" });
        }

        Message::ExportRequested(path) => {
            let path = path.unwrap_or_else(|| {
                export_cfg
                    .directory
                    .join(pimon_export::timestamped_filename(&export_cfg.filename_prefix))
            });
            match session.export(&path) {
                Ok(rows) => info!("saved {rows} samples to '{}'", path.display()),
                Err(e) => error!("export to '{}' failed: {e}", path.display()),
            }
        }

        Message::ConfigReloaded => match pimon_config::load(config_path) {
            Ok(fresh) => {
                session.apply_thresholds(&fresh.thresholds);
                *export_cfg = fresh.export;
                info!("config reloaded (interval and theme changes apply on restart)");
            }
            Err(e) => warn!("config reload failed: {e}"),
        },

        Message::Shutdown => {
            info!("shutting down");
            return true;
        }
    }
    false
}
