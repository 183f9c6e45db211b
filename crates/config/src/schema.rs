use batt_core::{BatteryState, Orientation};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `batt.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Base unit in density-independent pixels.  The widget is
    /// `size × 2·size` in portrait and `2·size × size` in landscape.
    pub size: u32,
    /// Display density: pixels per density-independent pixel.
    pub scale: f32,
    /// Corner radius of shell and fill, in density-independent pixels.
    pub corner_radius: f32,
    /// Vertical battery with the cap on top, or horizontal with the cap on
    /// the right.
    pub orientation: Orientation,
    /// Shell (background) and fill (level) colors per style bucket.
    pub colors: ColorConfig,
    /// PNG shown while charging.  `None` = built-in bolt glyph.
    pub charging_icon: Option<PathBuf>,
    /// PNG shown on low charge.  `None` = built-in exclamation glyph.
    pub warning_icon: Option<PathBuf>,
    /// Initial charge level in percent.
    pub charge_level: i32,
    /// Levels strictly below this use the warning style and show the
    /// warning icon.
    pub warning_charge_level: u8,
    /// Levels at or below this use the critical style.  Expected to be lower
    /// than `warning_charge_level`; the ordering is not checked.
    pub critical_charge_level: u8,
    /// Initial charging flag.
    pub is_charging: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            size:                  50,
            scale:                 1.0,
            corner_radius:         10.0,
            orientation:           Orientation::Portrait,
            colors:                ColorConfig::default(),
            charging_icon:         None,
            warning_icon:          None,
            charge_level:          50,
            warning_charge_level:  30,
            critical_charge_level: 10,
            is_charging:           false,
        }
    }
}

impl IndicatorConfig {
    /// Initial state described by the configuration (level clamped).
    pub fn initial_state(&self) -> BatteryState {
        BatteryState::new(self.charge_level, self.is_charging)
    }
}

/// Hex colors (`#RRGGBB` or `#RRGGBBAA`) for each style bucket.
///
/// `*_background` paints the shell and cap, `*_level` paints the fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub normal_background:   String,
    pub normal_level:        String,
    pub warning_background:  String,
    pub warning_level:       String,
    pub critical_background: String,
    pub critical_level:      String,
    pub charging_background: String,
    pub charging_level:      String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            normal_background:   "#86B6F6".to_string(),
            normal_level:        "#4E94F1".to_string(),
            warning_background:  "#FFCF96".to_string(),
            warning_level:       "#F5AD56".to_string(),
            critical_background: "#EF5350".to_string(),
            critical_level:      "#B71C1C".to_string(),
            charging_background: "#89EC9E".to_string(),
            charging_level:      "#4DD86C".to_string(),
        }
    }
}
