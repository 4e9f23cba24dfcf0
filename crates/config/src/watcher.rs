use std::path::Path;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Spawn a filesystem watcher for the config file.
///
/// Returns a receiver that fires `()` on every detected write, letting the
/// session re-read the file and apply fresh thresholds without a restart.
/// The watcher task ends when the receiver is dropped.
pub fn watch(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    let path = path.as_ref().to_path_buf();

    tokio::spawn(async move {
        use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
        use std::time::Duration;

        let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

        let mut watcher = match RecommendedWatcher::new(
            move |res| {
                let _ = sync_tx.blocking_send(res);
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        ) {
            Ok(w) => w,
            Err(e) => {
                error!("Failed to create filesystem watcher: {e}");
                return;
            }
        };

        if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
            // Normal when no config file was ever written; live reload is
            // simply unavailable then.
            warn!("Not watching '{}': {e}", path.display());
            return;
        }

        info!("Watching config file: {}", path.display());

        while let Some(event) = sync_rx.recv().await {
            match event {
                Ok(e) => {
                    use notify::EventKind::*;
                    if matches!(e.kind, Modify(_) | Create(_)) && tx.send(()).await.is_err() {
                        break; // receiver dropped
                    }
                }
                Err(e) => warn!("Watcher error: {e}"),
            }
        }
    });

    rx
}
