use crate::layout::Layout;
use crate::plan::{IconKind, IconPlacement, Rotation};
use batt_core::{BatteryState, Orientation};
use batt_theme::Thresholds;

/// Which glyph to show, if any.  Charging takes precedence; the warning
/// glyph only appears on battery below the warning level.
pub fn select_icon(state: &BatteryState, thresholds: Thresholds) -> Option<IconKind> {
    if state.is_charging {
        Some(IconKind::Charging)
    } else if state.charge_level < thresholds.warning {
        Some(IconKind::Warning)
    } else {
        None
    }
}

/// Clockwise rotation that keeps the glyph's "up" pointing toward the cap.
pub fn rotation_for(icon: IconKind, orientation: Orientation) -> Rotation {
    match (orientation, icon) {
        (Orientation::Portrait, _)                   => Rotation::Upright,
        (Orientation::Landscape, IconKind::Charging) => Rotation::Cw270,
        (Orientation::Landscape, IconKind::Warning)  => Rotation::Cw90,
    }
}

pub fn place_icon(layout: &Layout, state: &BatteryState, thresholds: Thresholds) -> Option<IconPlacement> {
    let icon = select_icon(state, thresholds)?;
    Some(IconPlacement {
        icon,
        rect:     layout.icon,
        rotation: rotation_for(icon, layout.orientation),
    })
}
