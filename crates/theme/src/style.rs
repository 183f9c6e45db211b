use serde::Serialize;

/// Named style a draw is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleBucket {
    Normal,
    Warning,
    Critical,
    Charging,
}

/// Charge levels that switch the style bucket.
///
/// Callers are expected to keep `critical < warning`; the order is not
/// enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Levels strictly below this are at least `Warning`.
    pub warning:  u8,
    /// Levels at or below this are `Critical`.
    pub critical: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { warning: 30, critical: 10 }
    }
}

impl StyleBucket {
    /// Bucket for a level, ignoring the charging flag.
    pub fn for_level(level: u8, thresholds: Thresholds) -> Self {
        if level <= thresholds.critical {
            StyleBucket::Critical
        } else if level < thresholds.warning {
            StyleBucket::Warning
        } else {
            StyleBucket::Normal
        }
    }

    /// Bucket for a level; charging always wins.
    pub fn select(level: u8, is_charging: bool, thresholds: Thresholds) -> Self {
        if is_charging {
            StyleBucket::Charging
        } else {
            Self::for_level(level, thresholds)
        }
    }
}
