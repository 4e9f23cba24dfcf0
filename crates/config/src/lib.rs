pub mod schema;
pub mod watcher;

pub use schema::{ExportConfig, MonitorConfig, SamplingConfig, ThemeConfig, ThresholdConfig};
pub use watcher::watch;

use pimon_core::{MonitorError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MonitorConfig::default()`
/// if the file doesn't exist so the monitor always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MonitorConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MonitorError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| MonitorError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("pimon").join("pimon.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimon_core::Severity;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/definitely/not/a/real/pimon.toml").unwrap();
        assert_eq!(cfg.sampling.interval_ms, 1000);
        assert_eq!(cfg.sampling.history, 3600);
    }

    #[test]
    fn threshold_overrides_parse_and_classify() {
        let cfg: MonitorConfig = toml::from_str(
            r#"
            [thresholds.cpu]
            elevated = 30.0
            critical = 60.0
            "#,
        )
        .unwrap();

        assert_eq!(cfg.thresholds.cpu.classify(45.0), Severity::Elevated);
        // Untouched sections keep their defaults.
        assert_eq!(cfg.thresholds.temperature.critical, 70.0);
        assert_eq!(cfg.theme.nominal, "#18A558");
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(toml::from_str::<MonitorConfig>("sampling = 12").is_err());
        assert!(toml::from_str::<MonitorConfig>("not valid toml [[").is_err());
    }
}
