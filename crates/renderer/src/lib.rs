//! Geometry and paint computation for the battery indicator.
//!
//! Everything here is a pure function of configuration, state and pixel
//! bounds.  [`compute_draw_plan`] turns those into an immutable [`DrawPlan`];
//! a [`Surface`] backend executes it.
//!
//! - [`layout`]: shell, cap, fill-span and icon rectangles
//! - [`fill`]: the proportional fill, split between body and cap
//! - [`icon`]: charging / warning glyph selection and rotation
//! - [`raster`]: software RGBA surface with PNG output

pub mod bitmap;
pub mod fill;
pub mod icon;
pub mod layout;
pub mod plan;
pub mod raster;
pub mod surface;

pub use bitmap::Bitmap;
pub use layout::Layout;
pub use plan::{compute_draw_plan, DrawCommand, DrawPlan, IconKind, IconPlacement, Part, Rotation, Shape};
pub use raster::Canvas;
pub use surface::Surface;

use batt_config::IndicatorConfig;
use batt_core::Orientation;
use batt_theme::{Palette, Thresholds};

/// Everything about the look of the indicator that does not change with the
/// charge level.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub orientation:   Orientation,
    /// Corner radius in pixels.
    pub corner_radius: f32,
    pub palette:       Palette,
    pub thresholds:    Thresholds,
}

impl Appearance {
    /// Build an [`Appearance`] from the loaded configuration.
    pub fn from_config(cfg: &IndicatorConfig) -> Self {
        Self {
            orientation:   cfg.orientation,
            corner_radius: (cfg.corner_radius * cfg.scale).max(0.0),
            palette:       Palette::from_config(&cfg.colors),
            thresholds:    Thresholds {
                warning:  cfg.warning_charge_level,
                critical: cfg.critical_charge_level,
            },
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_config(&IndicatorConfig::default())
    }
}
