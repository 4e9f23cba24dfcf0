//! CPU temperature probe.
//!
//! Tries `vcgencmd measure_temp` (the Raspberry Pi firmware tool) first, then
//! the generic kernel thermal zone. An absent reading is a normal, handled
//! condition — the caller shows `N/A` and stores the sentinel.

use std::process::Command;
use tracing::debug;

const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Read the CPU temperature in °C, or `None` when no source is usable.
pub fn read() -> Option<f32> {
    vcgencmd().or_else(sysfs_thermal)
}

fn vcgencmd() -> Option<f32> {
    let output = match Command::new("vcgencmd").arg("measure_temp").output() {
        Ok(out) if out.status.success() => out,
        Ok(out) => {
            debug!("vcgencmd exited with {}", out.status);
            return None;
        }
        Err(e) => {
            debug!("vcgencmd unavailable: {e}");
            return None;
        }
    };

    parse_vcgencmd(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the `temp=48.3'C` line printed by `vcgencmd measure_temp`.
fn parse_vcgencmd(raw: &str) -> Option<f32> {
    raw.trim()
        .strip_prefix("temp=")?
        .trim_end_matches("'C")
        .parse()
        .ok()
}

/// Fallback: thermal zone 0, reported in millidegrees.
fn sysfs_thermal() -> Option<f32> {
    let raw = std::fs::read_to_string(THERMAL_ZONE).ok()?;
    let millidegrees: f32 = raw.trim().parse().ok()?;
    Some(millidegrees / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vcgencmd_output() {
        assert_eq!(parse_vcgencmd("temp=48.3'C\n"), Some(48.3));
        assert_eq!(parse_vcgencmd("temp=60.0'C"), Some(60.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_vcgencmd(""), None);
        assert_eq!(parse_vcgencmd("error: not supported"), None);
        assert_eq!(parse_vcgencmd("temp=notanumber'C"), None);
    }
}
