use crate::sample::Sample;

/// Supplies one [`Sample`] per sampling tick.
///
/// Reads must not fail: metrics that cannot be obtained degrade to zero
/// (CPU/memory) or `None` (temperature) instead of surfacing an error.
pub trait MetricSource {
    fn sample(&mut self) -> Sample;
}
