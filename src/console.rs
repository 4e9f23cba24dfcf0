//! Terminal presenter: one progress-bar + sparkline panel per metric,
//! color-coded by severity.
//!
//! Redraws in place each tick by moving the cursor back up over the
//! previous frame.

use pimon_core::{Metric, MonitorDisplay, Severity};
use pimon_theme::Theme;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const CLEAR_LINE: &str = "\x1b[2K";
/// Two lines per metric: label + bar, then the sparkline.
const LINES_PER_FRAME: usize = Metric::ALL.len() * 2;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

struct Panel {
    label: String,
    value: Option<f32>,
    severity: Severity,
    series: Vec<f32>,
}

impl Panel {
    fn new(metric: Metric) -> Self {
        Self {
            label: metric.format_label(None),
            value: None,
            severity: Severity::Unknown,
            series: Vec::new(),
        }
    }
}

/// Draws the three metric panels to stdout.
pub struct Console {
    theme: Theme,
    cpu: Panel,
    memory: Panel,
    temperature: Panel,
    frames: usize,
}

impl Console {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            cpu: Panel::new(Metric::Cpu),
            memory: Panel::new(Metric::Memory),
            temperature: Panel::new(Metric::Temperature),
            frames: 0,
        }
    }

    fn panel(&self, metric: Metric) -> &Panel {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Memory => &self.memory,
            Metric::Temperature => &self.temperature,
        }
    }

    fn panel_mut(&mut self, metric: Metric) -> &mut Panel {
        match metric {
            Metric::Cpu => &mut self.cpu,
            Metric::Memory => &mut self.memory,
            Metric::Temperature => &mut self.temperature,
        }
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        if self.frames > 0 {
            write!(out, "\x1b[{LINES_PER_FRAME}A")?;
        }

        for metric in Metric::ALL {
            let panel = self.panel(metric);
            let color = self.theme.severity_color(panel.severity).ansi_fg();
            let bar = bar(panel.value, self.theme.bar_width);
            let spark = sparkline(&panel.series, self.theme.sparkline_width);

            writeln!(
                out,
                "{CLEAR_LINE}{color}{:<24}{RESET} {color}{bar} {}{RESET}",
                panel.label,
                panel.severity.label()
            )?;
            writeln!(out, "{CLEAR_LINE}  {spark}")?;
        }

        out.flush()
    }
}

impl MonitorDisplay for Console {
    fn update_metric(&mut self, metric: Metric, value: Option<f32>, label: &str, severity: Severity) {
        let panel = self.panel_mut(metric);
        panel.label = label.to_string();
        panel.value = value;
        panel.severity = severity;
    }

    fn update_series(&mut self, metric: Metric, series: &[f32]) {
        self.panel_mut(metric).series = series.to_vec();
    }

    fn render(&mut self) {
        let mut out = io::stdout().lock();
        if self.draw(&mut out).is_ok() {
            self.frames += 1;
        }
    }
}

/// Text progress bar over a 0–100 range, e.g. `[████░░░░░░]`.
/// An absent reading draws empty.
fn bar(value: Option<f32>, width: usize) -> String {
    let filled = value.map_or(0, |v| {
        ((v.clamp(0.0, 100.0) / 100.0) * width as f32).round() as usize
    });

    let mut s = String::with_capacity(width + 2);
    s.push('[');
    for i in 0..width {
        s.push(if i < filled { '█' } else { '░' });
    }
    s.push(']');
    s
}

/// Block-character sparkline of the most recent `width` values (0–100 scale).
fn sparkline(series: &[f32], width: usize) -> String {
    let start = series.len().saturating_sub(width);
    series[start..]
        .iter()
        .map(|&v| {
            let idx = ((v.clamp(0.0, 100.0) / 100.0) * (SPARK_LEVELS.len() - 1) as f32).round()
                as usize;
            SPARK_LEVELS[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fill_tracks_the_value() {
        assert_eq!(bar(Some(0.0), 10), "[░░░░░░░░░░]");
        assert_eq!(bar(Some(50.0), 10), "[█████░░░░░]");
        assert_eq!(bar(Some(100.0), 10), "[██████████]");
        assert_eq!(bar(None, 10), "[░░░░░░░░░░]");
    }

    #[test]
    fn bar_clamps_out_of_range_values() {
        assert_eq!(bar(Some(250.0), 4), "[████]");
        assert_eq!(bar(Some(-5.0), 4), "[░░░░]");
    }

    #[test]
    fn sparkline_scales_and_truncates() {
        assert_eq!(sparkline(&[0.0, 50.0, 100.0], 10), "▁▅█");
        // Only the most recent `width` values are shown.
        assert_eq!(sparkline(&[0.0, 0.0, 100.0, 100.0], 2), "██");
        assert_eq!(sparkline(&[], 10), "");
    }

    #[test]
    fn frame_has_two_lines_per_metric() {
        let mut console = Console::new(Theme::default());
        console.update_metric(Metric::Cpu, Some(42.0), "CPU Usage: 42.0%", Severity::Nominal);
        console.update_series(Metric::Cpu, &[42.0]);

        let mut out = Vec::new();
        console.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), LINES_PER_FRAME);
        assert!(text.contains("CPU Usage: 42.0%"));
        assert!(text.contains("nominal"));
    }
}
