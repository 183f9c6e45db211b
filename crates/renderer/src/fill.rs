//! The proportional fill: body first, spilling into the cap above 90 %.

use crate::layout::{percent_of, Layout};
use crate::plan::{Part, Shape};
use crate::Appearance;
use batt_core::{BatteryState, CornerSpec, Orientation, Rect};
use batt_theme::StyleBucket;

/// Level above which the fill continues into the cap.
pub const OVERFLOW_LEVEL: u8 = 90;
/// Body fills at or above this percent get all four corners rounded.
pub const ROUND_ALL_LEVEL: u8 = 85;

/// Percent of the fill span covered by the body fill.
#[inline]
pub fn body_percent(level: u8) -> u8 {
    level.min(OVERFLOW_LEVEL)
}

/// Body fill rectangle and its corners, or `None` for an empty battery.
///
/// The fill is anchored on the edge opposite the cap and grows toward it.
/// Below [`ROUND_ALL_LEVEL`] only the growing edge is rounded so the anchored
/// edge lines up with the shell.
pub fn body_fill(layout: &Layout, percent: u8, radius: f32) -> Option<(Rect, CornerSpec)> {
    if percent == 0 {
        return None;
    }
    let percent = body_percent(percent);
    let extent = percent_of(layout.fill_span(), i32::from(percent));
    let fb = layout.fill_bounds;
    let all = percent >= ROUND_ALL_LEVEL;

    let (rect, growing) = match layout.orientation {
        Orientation::Portrait => (
            Rect::new(fb.left, fb.bottom - extent, fb.right, fb.bottom),
            CornerSpec::North(radius),
        ),
        Orientation::Landscape => (
            Rect::new(fb.left, fb.top, fb.left + extent, fb.bottom),
            CornerSpec::East(radius),
        ),
    };

    Some((rect, if all { CornerSpec::Uniform(radius) } else { growing }))
}

/// Cap fill rectangle and its corners, drawn only above [`OVERFLOW_LEVEL`].
///
/// Grows from the body–cap junction toward the far end of the cap, covering
/// `(level − 90) / 10` of it.  The far corners are rounded.
pub fn cap_fill(layout: &Layout, level: u8, radius: f32) -> Option<(Rect, CornerSpec)> {
    if level <= OVERFLOW_LEVEL {
        return None;
    }
    let overflow = i32::from(level.min(100) - OVERFLOW_LEVEL);
    let cap = layout.cap;

    Some(match layout.orientation {
        Orientation::Portrait => {
            let boundary = cap.top + cap.height() * (10 - overflow) / 10;
            (Rect::new(cap.left, boundary, cap.right, cap.bottom), CornerSpec::North(radius))
        }
        Orientation::Landscape => {
            let boundary = cap.right - cap.width() * (10 - overflow) / 10;
            (Rect::new(cap.left, cap.top, boundary, cap.bottom), CornerSpec::East(radius))
        }
    })
}

/// Fill shapes for the current state, body first.
pub fn fill_shapes(layout: &Layout, state: &BatteryState, appearance: &Appearance) -> Vec<Shape> {
    let level = state.charge_level;
    let radius = appearance.corner_radius;
    let mut shapes = Vec::with_capacity(2);

    if let Some((rect, corners)) = body_fill(layout, level, radius) {
        // The body fill is styled by what it shows, not by the raw level.
        let bucket = StyleBucket::select(body_percent(level), state.is_charging, appearance.thresholds);
        shapes.push(Shape {
            part: Part::BodyFill,
            rect,
            color: appearance.palette.pair(bucket).level,
            corners,
        });
    }

    if let Some((rect, corners)) = cap_fill(layout, level, radius) {
        // Only reachable above 90 %, so never a low-charge colour.
        let bucket = if state.is_charging { StyleBucket::Charging } else { StyleBucket::Normal };
        shapes.push(Shape {
            part: Part::CapFill,
            rect,
            color: appearance.palette.pair(bucket).level,
            corners,
        });
    }

    shapes
}
