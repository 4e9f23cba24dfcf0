use crate::severity::Severity;

/// The three metrics tracked by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Memory,
    Temperature,
}

impl Metric {
    /// All metrics in display (and CSV column) order.
    pub const ALL: [Self; 3] = [Self::Cpu, Self::Memory, Self::Temperature];

    /// Short human name used in labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpu => "CPU Usage",
            Self::Memory => "Memory Usage",
            Self::Temperature => "Temperature",
        }
    }

    /// Unit suffix for formatted values.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Cpu | Self::Memory => "%",
            Self::Temperature => "°C",
        }
    }

    /// CSV column title, e.g. `CPU Usage (%)`.
    pub fn column_title(self) -> String {
        format!("{} ({})", self.name(), self.unit())
    }

    /// Label for the latest reading, e.g. `CPU Usage: 42.0%`.
    /// Absent readings render as `N/A`.
    pub fn format_label(self, value: Option<f32>) -> String {
        match value {
            Some(v) => format!("{}: {v:.1}{}", self.name(), self.unit()),
            None => format!("{}: N/A", self.name()),
        }
    }
}

/// Consumed by the sampling loop to hand numbers to whatever frontend hosts it.
///
/// Implementations are purely presentational: they receive the latest reading
/// per metric (value, formatted label, severity hint) plus the full ordered
/// history for redraw, and feed nothing back into the sampling pipeline.
pub trait MonitorDisplay {
    /// Latest reading for one metric. `value` is `None` when the sensor is
    /// unavailable; `severity` is the styling hint derived from it.
    fn update_metric(&mut self, metric: Metric, value: Option<f32>, label: &str, severity: Severity);

    /// Full history of one metric, oldest→newest, for graph redraw.
    fn update_series(&mut self, metric: Metric, series: &[f32]);

    /// Called once per tick after all metrics have been updated.
    fn render(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_carry_value_and_unit() {
        assert_eq!(Metric::Cpu.format_label(Some(42.0)), "CPU Usage: 42.0%");
        assert_eq!(Metric::Memory.format_label(Some(55.31)), "Memory Usage: 55.3%");
        assert_eq!(
            Metric::Temperature.format_label(Some(48.3)),
            "Temperature: 48.3°C"
        );
    }

    #[test]
    fn absent_reading_renders_na() {
        assert_eq!(Metric::Temperature.format_label(None), "Temperature: N/A");
    }

    #[test]
    fn column_titles_match_export_header_wording() {
        assert_eq!(Metric::Cpu.column_title(), "CPU Usage (%)");
        assert_eq!(Metric::Memory.column_title(), "Memory Usage (%)");
        assert_eq!(Metric::Temperature.column_title(), "Temperature (°C)");
    }
}
