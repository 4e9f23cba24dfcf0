use pimon_core::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `pimon.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Sampling cadence and history depth.
    pub sampling: SamplingConfig,
    /// Severity threshold pairs per metric.
    pub thresholds: ThresholdConfig,
    /// Defaults for CSV exports.
    pub export: ExportConfig,
    /// Console color/size settings.
    pub theme: ThemeConfig,
}

/// Sampling cadence and history depth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Milliseconds between sampling ticks.
    pub interval_ms: u64,
    /// Number of samples retained (3600 = one hour at 1 Hz).
    pub history: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            history: 3600,
        }
    }
}

/// Per-metric threshold pairs. CPU and memory share defaults; temperature
/// has its own, tighter critical bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// CPU usage thresholds (percent).
    pub cpu: Thresholds,
    /// Memory usage thresholds (percent).
    pub memory: Thresholds,
    /// CPU temperature thresholds (°C).
    pub temperature: Thresholds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            cpu: Thresholds::CPU_MEM,
            memory: Thresholds::CPU_MEM,
            temperature: Thresholds::TEMPERATURE,
        }
    }
}

/// Defaults for CSV exports triggered without an explicit destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exports land in when no path is given with the command.
    pub directory: PathBuf,
    /// Filename prefix for timestamped exports
    /// (`<prefix>_YYYYmmdd_HHMMSS.csv`).
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            filename_prefix: "system_data".to_string(),
        }
    }
}

/// Console styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Hex color for nominal readings.
    pub nominal: String,
    /// Hex color for elevated readings.
    pub elevated: String,
    /// Hex color for critical readings.
    pub critical: String,
    /// Hex color for absent readings (sensor unavailable).
    pub unknown: String,
    /// Progress bar width in characters.
    pub bar_width: usize,
    /// Sparkline width in characters (most recent N samples shown).
    pub sparkline_width: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            nominal:  "#18A558".to_string(), // green
            elevated: "#F39C12".to_string(), // orange
            critical: "#E74C3C".to_string(), // red
            unknown:  "#7F8C8D".to_string(), // gray
            bar_width: 30,
            sparkline_width: 60,
        }
    }
}
