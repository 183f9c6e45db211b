use crate::bitmap::Bitmap;
use crate::layout::Layout;
use crate::surface::Surface;
use crate::{fill, icon, Appearance};
use batt_core::{BatteryState, CornerSpec, Orientation, Rect, Result, Size};
use batt_theme::{Color, StyleBucket};
use serde::Serialize;
use tracing::debug;

/// Which piece of the battery a shape paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    ShellBody,
    ShellCap,
    BodyFill,
    CapFill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Charging,
    Warning,
}

/// Clockwise rotation around the icon rectangle's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rotation {
    #[serde(rename = "0")]
    Upright,
    #[serde(rename = "90")]
    Cw90,
    #[serde(rename = "270")]
    Cw270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Upright => 0,
            Rotation::Cw90    => 90,
            Rotation::Cw270   => 270,
        }
    }
}

/// A filled, optionally rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    pub part:    Part,
    pub rect:    Rect,
    pub color:   Color,
    pub corners: CornerSpec,
}

/// A glyph blitted into `rect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconPlacement {
    pub icon:     IconKind,
    pub rect:     Rect,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Shape(Shape),
    Icon(IconPlacement),
}

/// Everything needed to paint one frame, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawPlan {
    pub bounds:   Size,
    /// Style bucket of the shell.
    pub bucket:   StyleBucket,
    pub commands: Vec<DrawCommand>,
}

/// Compute the full frame for `state` inside `bounds`.
pub fn compute_draw_plan(appearance: &Appearance, state: &BatteryState, bounds: Size) -> DrawPlan {
    let layout = Layout::compute(bounds, appearance.orientation);
    let bucket = StyleBucket::select(state.charge_level, state.is_charging, appearance.thresholds);
    let shell  = appearance.palette.pair(bucket).background;
    let radius = appearance.corner_radius;

    let body = Shape {
        part:    Part::ShellBody,
        rect:    layout.body,
        color:   shell,
        corners: CornerSpec::Uniform(radius),
    };
    let cap = Shape {
        part:    Part::ShellCap,
        rect:    layout.cap,
        color:   shell,
        corners: match layout.orientation {
            Orientation::Portrait  => CornerSpec::North(radius),
            Orientation::Landscape => CornerSpec::East(radius),
        },
    };

    let mut commands = Vec::with_capacity(5);
    match layout.orientation {
        Orientation::Portrait  => commands.extend([DrawCommand::Shape(cap), DrawCommand::Shape(body)]),
        Orientation::Landscape => commands.extend([DrawCommand::Shape(body), DrawCommand::Shape(cap)]),
    }
    commands.extend(
        fill::fill_shapes(&layout, state, appearance)
            .into_iter()
            .map(DrawCommand::Shape),
    );
    if let Some(placed) = icon::place_icon(&layout, state, appearance.thresholds) {
        commands.push(DrawCommand::Icon(placed));
    }

    DrawPlan { bounds, bucket, commands }
}

impl DrawPlan {
    /// The shape painting `part`, if this frame has one.
    pub fn shape(&self, part: Part) -> Option<&Shape> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Shape(s) if s.part == part => Some(s),
            _ => None,
        })
    }

    /// The icon of this frame, if any.
    pub fn icon(&self) -> Option<&IconPlacement> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Icon(i) => Some(i),
            _ => None,
        })
    }

    /// Execute the plan on `surface`.
    ///
    /// `icons` resolves glyph bitmaps; an icon without a bitmap is skipped.
    /// The first surface error aborts the frame.
    pub fn render<'a, S, F>(&self, surface: &mut S, icons: F) -> Result<()>
    where
        S: Surface + ?Sized,
        F: Fn(IconKind) -> Option<&'a Bitmap>,
    {
        for command in &self.commands {
            match command {
                DrawCommand::Shape(s) => surface.fill_shape(&s.rect, &s.corners, s.color)?,
                DrawCommand::Icon(i) => match icons(i.icon) {
                    Some(bitmap) => surface.draw_bitmap(bitmap, &i.rect, i.rotation)?,
                    None => debug!(icon = ?i.icon, "no bitmap; skipping icon"),
                },
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batt_theme::Thresholds;

    fn appearance(orientation: Orientation) -> Appearance {
        Appearance {
            orientation,
            thresholds: Thresholds { warning: 30, critical: 10 },
            ..Appearance::default()
        }
    }

    fn plan(level: i32, charging: bool) -> DrawPlan {
        compute_draw_plan(
            &appearance(Orientation::Portrait),
            &BatteryState::new(level, charging),
            Size::new(50, 100),
        )
    }

    #[test]
    fn half_charged_on_battery() {
        let plan = plan(50, false);
        let palette = appearance(Orientation::Portrait).palette;

        assert_eq!(plan.bucket, StyleBucket::Normal);
        assert_eq!(plan.shape(Part::ShellBody).unwrap().color, palette.normal.background);
        let fill = plan.shape(Part::BodyFill).unwrap();
        assert_eq!(fill.rect.height(), 50);
        assert_eq!(fill.color, palette.normal.level);
        assert!(plan.shape(Part::CapFill).is_none());
        assert!(plan.icon().is_none());
    }

    #[test]
    fn overflow_into_cap() {
        let plan = plan(95, false);
        let palette = appearance(Orientation::Portrait).palette;

        let body = plan.shape(Part::BodyFill).unwrap();
        assert_eq!(body.rect.height(), 90);
        assert_eq!(body.corners, CornerSpec::Uniform(10.0));

        let cap = plan.shape(Part::CapFill).unwrap();
        let shell_cap = plan.shape(Part::ShellCap).unwrap();
        assert_eq!(cap.rect.height(), shell_cap.rect.height() / 2);
        assert_eq!(cap.color, palette.normal.level);
    }

    #[test]
    fn critical_on_battery_shows_warning() {
        let plan = plan(5, false);
        let palette = appearance(Orientation::Portrait).palette;

        assert_eq!(plan.bucket, StyleBucket::Critical);
        assert_eq!(plan.shape(Part::ShellCap).unwrap().color, palette.critical.background);
        assert_eq!(plan.shape(Part::BodyFill).unwrap().color, palette.critical.level);
        assert_eq!(plan.icon().unwrap().icon, IconKind::Warning);
    }

    #[test]
    fn charging_overrides_critical() {
        let plan = plan(5, true);
        let palette = appearance(Orientation::Portrait).palette;

        assert_eq!(plan.bucket, StyleBucket::Charging);
        assert_eq!(plan.shape(Part::ShellBody).unwrap().color, palette.charging.background);
        assert_eq!(plan.shape(Part::BodyFill).unwrap().color, palette.charging.level);
        assert_eq!(plan.icon().unwrap().icon, IconKind::Charging);
    }

    #[test]
    fn charging_cap_fill_uses_charging_level_color() {
        let plan = plan(100, true);
        let palette = appearance(Orientation::Portrait).palette;
        assert_eq!(plan.shape(Part::CapFill).unwrap().color, palette.charging.level);
    }

    #[test]
    fn empty_battery_draws_shell_only() {
        let plan = plan(0, false);
        assert!(plan.shape(Part::ShellBody).is_some());
        assert!(plan.shape(Part::ShellCap).is_some());
        assert!(plan.shape(Part::BodyFill).is_none());
        assert!(plan.shape(Part::CapFill).is_none());
    }

    #[test]
    fn exactly_ninety_has_no_cap_fill() {
        assert!(plan(90, false).shape(Part::CapFill).is_none());
        assert!(plan(91, false).shape(Part::CapFill).is_some());
    }

    #[test]
    fn landscape_shell_corners() {
        let plan = compute_draw_plan(
            &appearance(Orientation::Landscape),
            &BatteryState::new(50, false),
            Size::new(100, 50),
        );
        assert_eq!(plan.shape(Part::ShellCap).unwrap().corners, CornerSpec::East(10.0));
        assert_eq!(plan.shape(Part::BodyFill).unwrap().corners, CornerSpec::East(10.0));
        assert!(matches!(plan.commands[0], DrawCommand::Shape(Shape { part: Part::ShellBody, .. })));
    }

    #[test]
    fn plan_is_idempotent() {
        let a = plan(73, true);
        let b = plan(73, true);
        assert_eq!(a, b);
    }
}
