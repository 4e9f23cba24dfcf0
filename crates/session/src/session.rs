use pimon_config::{MonitorConfig, ThresholdConfig};
use pimon_core::{
    Metric, MetricSource, MonitorDisplay, Result, Sample, SampleBuffer, Thresholds,
};
use std::path::Path;

/// Owns everything the sampling loop mutates: the history buffer, the pause
/// flag and the active threshold pairs.
///
/// The session is deliberately free of timers and UI — an external scheduler
/// calls [`tick`](Self::tick) once per interval and hands in the display
/// collaborator, which keeps the whole pipeline testable with a scripted
/// source and a recording display.
pub struct MonitorSession<S> {
    source: S,
    buffer: SampleBuffer,
    paused: bool,
    cpu: Thresholds,
    memory: Thresholds,
    temperature: Thresholds,
}

impl<S: MetricSource> MonitorSession<S> {
    pub fn new(source: S, config: &MonitorConfig) -> Self {
        Self {
            source,
            buffer: SampleBuffer::new(config.sampling.history),
            paused: false,
            cpu: config.thresholds.cpu,
            memory: config.thresholds.memory,
            temperature: config.thresholds.temperature,
        }
    }

    /// One sampling tick: read, append, classify, hand off to the display.
    ///
    /// A paused session leaves both the buffer and the display untouched;
    /// the timer driving this keeps firing regardless.
    pub fn tick<D: MonitorDisplay>(&mut self, display: &mut D) {
        if self.paused {
            return;
        }

        let sample = self.source.sample();
        self.buffer.push(sample.clone());
        self.present(&sample, display);
    }

    fn present<D: MonitorDisplay>(&self, sample: &Sample, display: &mut D) {
        let readings = [
            (
                Metric::Cpu,
                Some(sample.cpu_percent),
                self.cpu.classify(sample.cpu_percent),
            ),
            (
                Metric::Memory,
                Some(sample.mem_percent),
                self.memory.classify(sample.mem_percent),
            ),
            (
                Metric::Temperature,
                sample.temp_celsius,
                self.temperature.classify_opt(sample.temp_celsius),
            ),
        ];

        for (metric, value, severity) in readings {
            let label = metric.format_label(value);
            display.update_metric(metric, value, &label, severity);
        }

        display.update_series(Metric::Cpu, &self.buffer.cpu_series());
        display.update_series(Metric::Memory, &self.buffer.mem_series());
        display.update_series(Metric::Temperature, &self.buffer.temp_series());
        display.render();
    }

    /// Flip the pause flag; returns the new state (`true` = paused).
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Export the current history as CSV.
    ///
    /// The snapshot is taken here, on the session's own scheduling turn, so
    /// the exported rows are a consistent oldest→newest view.
    pub fn export(&self, path: &Path) -> Result<usize> {
        pimon_export::export_csv(path, &self.buffer.snapshot())
    }

    /// Apply freshly loaded threshold pairs (config live-reload).
    pub fn apply_thresholds(&mut self, thresholds: &ThresholdConfig) {
        self.cpu = thresholds.cpu;
        self.memory = thresholds.memory;
        self.temperature = thresholds.temperature;
    }
}
