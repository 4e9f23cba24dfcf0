use chrono::{DateTime, Local};

/// `strftime` format for sample timestamps, used in labels and CSV rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped reading of CPU%, memory% and optional CPU temperature.
///
/// Immutable once created — the sampling loop only ever appends whole samples
/// to the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Local wall-clock time the reading was taken (second precision).
    pub timestamp: DateTime<Local>,
    /// System-wide CPU utilization (0.0 – 100.0).
    pub cpu_percent: f32,
    /// Used share of physical memory (0.0 – 100.0).
    pub mem_percent: f32,
    /// CPU temperature in °C. `None` when the sensor could not be read.
    pub temp_celsius: Option<f32>,
}

impl Sample {
    /// Build a sample stamped with the current local time.
    pub fn new(cpu_percent: f32, mem_percent: f32, temp_celsius: Option<f32>) -> Self {
        Self {
            timestamp: Local::now(),
            cpu_percent,
            mem_percent,
            temp_celsius,
        }
    }

    /// Temperature with the absent sentinel applied (`None` → `0.0`), the form
    /// stored in plotted series and exported rows.
    #[must_use]
    pub fn temp_or_sentinel(&self) -> f32 {
        self.temp_celsius.unwrap_or(0.0)
    }

    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`.
    pub fn format_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sentinel_applies_only_when_absent() {
        assert_eq!(Sample::new(10.0, 20.0, Some(42.5)).temp_or_sentinel(), 42.5);
        assert_eq!(Sample::new(10.0, 20.0, None).temp_or_sentinel(), 0.0);
    }

    #[test]
    fn timestamp_format_is_second_precision() {
        let mut sample = Sample::new(0.0, 0.0, None);
        sample.timestamp = Local.with_ymd_and_hms(2026, 8, 6, 9, 5, 3).unwrap();
        assert_eq!(sample.format_timestamp(), "2026-08-06 09:05:03");
    }
}
