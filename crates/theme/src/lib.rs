pub mod colors;

pub use colors::Color;

use pimon_config::ThemeConfig;
use pimon_core::Severity;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings. Building a theme is
/// infallible — invalid color strings fall back to the built-in palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub nominal: Color,
    pub elevated: Color,
    pub critical: Color,
    pub unknown: Color,
    /// Progress bar width in characters.
    pub bar_width: usize,
    /// Sparkline width in characters.
    pub sparkline_width: usize,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            nominal:  Color::from_hex(&cfg.nominal).unwrap_or(Color::GREEN),
            elevated: Color::from_hex(&cfg.elevated).unwrap_or(Color::ORANGE),
            critical: Color::from_hex(&cfg.critical).unwrap_or(Color::RED),
            unknown:  Color::from_hex(&cfg.unknown).unwrap_or(Color::GRAY),
            bar_width: cfg.bar_width.max(4),
            sparkline_width: cfg.sparkline_width.max(4),
        }
    }

    /// Color hint for a severity bucket.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Nominal => self.nominal,
            Severity::Elevated => self.elevated,
            Severity::Critical => self.critical,
            Severity::Unknown => self.unknown,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_uses_builtin_palette() {
        let theme = Theme::default();
        assert_eq!(theme.severity_color(Severity::Nominal), Color::GREEN);
        assert_eq!(theme.severity_color(Severity::Elevated), Color::ORANGE);
        assert_eq!(theme.severity_color(Severity::Critical), Color::RED);
        assert_eq!(theme.severity_color(Severity::Unknown), Color::GRAY);
    }

    #[test]
    fn invalid_hex_falls_back() {
        let cfg = ThemeConfig {
            critical: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).critical, Color::RED);
    }
}
