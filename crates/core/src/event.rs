use std::path::PathBuf;

/// All messages (events) that can flow into the monitoring session.
///
/// Sources:
/// - User command reader → `PauseToggled`, `ExportRequested`, `Shutdown`
/// - Config watcher task → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// User toggled the pause flag. The tick timer keeps running either way;
    /// paused ticks simply skip the sample/append/render step.
    PauseToggled,
    /// User asked for a CSV export. `None` = derive a timestamped default
    /// path from the export config.
    ExportRequested(Option<PathBuf>),
    /// Config file changed on disk — re-read and apply threshold pairs.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
