use serde::{Deserialize, Serialize};

/// Display-hint bucket for a metric reading.
///
/// Drives the color/label treatment in the frontend only — buffering and
/// export never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Elevated,
    Critical,
    /// The reading is absent (sensor unavailable). Rendered neutrally, never
    /// conflated with [`Severity::Nominal`].
    Unknown,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Elevated => "elevated",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }
}

/// A pair of inclusive upper bounds splitting a metric's range into
/// nominal / elevated / critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Values above this are at least elevated.
    pub elevated: f32,
    /// Values above this are critical.
    pub critical: f32,
}

impl Thresholds {
    /// Default pair for CPU and memory percentages.
    pub const CPU_MEM: Self = Self {
        elevated: 50.0,
        critical: 80.0,
    };

    /// Default pair for CPU temperature (°C).
    pub const TEMPERATURE: Self = Self {
        elevated: 50.0,
        critical: 70.0,
    };

    pub fn new(elevated: f32, critical: f32) -> Self {
        Self { elevated, critical }
    }

    /// Classify a reading. Total: every value maps to exactly one bucket.
    pub fn classify(&self, value: f32) -> Severity {
        if value <= self.elevated {
            Severity::Nominal
        } else if value <= self.critical {
            Severity::Elevated
        } else {
            Severity::Critical
        }
    }

    /// Classify an optional reading; absent is [`Severity::Unknown`].
    pub fn classify_opt(&self, value: Option<f32>) -> Severity {
        match value {
            Some(v) => self.classify(v),
            None => Severity::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_mem_boundaries_are_inclusive() {
        let t = Thresholds::CPU_MEM;
        assert_eq!(t.classify(0.0), Severity::Nominal);
        assert_eq!(t.classify(50.0), Severity::Nominal);
        assert_eq!(t.classify(50.01), Severity::Elevated);
        assert_eq!(t.classify(80.0), Severity::Elevated);
        assert_eq!(t.classify(80.01), Severity::Critical);
        assert_eq!(t.classify(100.0), Severity::Critical);
    }

    #[test]
    fn temperature_uses_its_own_pair() {
        let t = Thresholds::TEMPERATURE;
        assert_eq!(t.classify(50.0), Severity::Nominal);
        assert_eq!(t.classify(60.0), Severity::Elevated);
        assert_eq!(t.classify(70.0), Severity::Elevated);
        assert_eq!(t.classify(70.5), Severity::Critical);
    }

    #[test]
    fn absent_reading_is_unknown_not_nominal() {
        let t = Thresholds::TEMPERATURE;
        assert_eq!(t.classify_opt(None), Severity::Unknown);
        assert_eq!(t.classify_opt(Some(40.0)), Severity::Nominal);
        assert_ne!(t.classify_opt(None), Severity::Nominal);
    }
}
