pub mod temperature;

use pimon_core::{MetricSource, Sample};
use sysinfo::System;

/// [`MetricSource`] backed by `sysinfo`, plus the Raspberry Pi temperature
/// probe.
///
/// CPU usage is computed against the previous refresh as a baseline, so the
/// very first sample reads 0% — acceptable for a monitoring display.
pub struct SystemMetrics {
    sys: System,
}

impl SystemMetrics {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SystemMetrics {
    fn sample(&mut self) -> Sample {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();

        let cpus = self.sys.cpus();
        let cpu = if cpus.is_empty() {
            0.0
        } else {
            cpus.iter().map(|c| c.cpu_usage()).sum::<f32>() / cpus.len() as f32
        };

        let total = self.sys.total_memory();
        let mem = if total == 0 {
            0.0
        } else {
            self.sys.used_memory() as f32 / total as f32 * 100.0
        };

        Sample::new(cpu, mem, temperature::read())
    }
}
