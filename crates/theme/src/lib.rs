pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{StyleBucket, Thresholds};

use batt_config::ColorConfig;

/// Shell and fill colour for one style bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePair {
    /// Paints the shell body and cap.
    pub background: Color,
    /// Paints the fill.
    pub level:      Color,
}

/// Compiled colour set derived from [`ColorConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Palette::from_config`] is infallible: invalid color strings fall
/// back to the built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub normal:   StylePair,
    pub warning:  StylePair,
    pub critical: StylePair,
    pub charging: StylePair,
}

impl Palette {
    /// Build a [`Palette`] from the config file's `[colors]` section.
    pub fn from_config(cfg: &ColorConfig) -> Self {
        let parse = |hex: &str, fallback: Color| Color::from_hex(hex).unwrap_or(fallback);
        Self {
            normal: StylePair {
                background: parse(&cfg.normal_background, Color::NORMAL_BG),
                level:      parse(&cfg.normal_level, Color::NORMAL_LEVEL),
            },
            warning: StylePair {
                background: parse(&cfg.warning_background, Color::WARNING_BG),
                level:      parse(&cfg.warning_level, Color::WARNING_LEVEL),
            },
            critical: StylePair {
                background: parse(&cfg.critical_background, Color::CRITICAL_BG),
                level:      parse(&cfg.critical_level, Color::CRITICAL_LEVEL),
            },
            charging: StylePair {
                background: parse(&cfg.charging_background, Color::CHARGING_BG),
                level:      parse(&cfg.charging_level, Color::CHARGING_LEVEL),
            },
        }
    }

    /// Colours for `bucket`.
    pub fn pair(&self, bucket: StyleBucket) -> StylePair {
        match bucket {
            StyleBucket::Normal   => self.normal,
            StyleBucket::Warning  => self.warning,
            StyleBucket::Critical => self.critical,
            StyleBucket::Charging => self.charging,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}
