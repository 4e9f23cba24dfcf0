//! CSV export of the sample history.

use pimon_core::{Result, Sample};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Header row of every exported file.
pub const CSV_HEADER: &str = "Timestamp,CPU Usage (%),Memory Usage (%),Temperature (°C)";

/// Write `samples` (oldest→newest) as CSV to `path`.
///
/// Callers pass an owned snapshot, so an append happening on the same tick
/// can never be half-visible here. Absent temperatures are written as `0`.
/// Returns the number of data rows written.
pub fn export_csv(path: &Path, samples: &[Sample]) -> Result<usize> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{CSV_HEADER}")?;
    for sample in samples {
        writeln!(
            out,
            "{},{},{},{}",
            sample.format_timestamp(),
            sample.cpu_percent,
            sample.mem_percent,
            sample.temp_or_sentinel()
        )?;
    }
    out.flush()?;

    info!("exported {} samples to '{}'", samples.len(), path.display());
    Ok(samples.len())
}

/// Timestamped default filename, e.g. `system_data_20260806_141503.csv`.
pub fn timestamped_filename(prefix: &str) -> String {
    format!("{prefix}_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}
