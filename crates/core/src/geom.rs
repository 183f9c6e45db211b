use serde::{Deserialize, Serialize};

/// Pixel dimensions of a widget.  A zero component means "unconstrained"
/// when used as an available size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width:  u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates, `y` pointing down.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left:   i32,
    pub top:    i32,
    pub right:  i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// `true` when the rectangle covers no pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Geometric center, used as the pivot for icon rotation.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 / 2.0,
            (self.top + self.bottom) as f32 / 2.0,
        )
    }
}

/// Which corners of a rectangle are rounded, and by how much.
///
/// Compass names follow the screen: north is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "radius", rename_all = "lowercase")]
pub enum CornerSpec {
    Square,
    Uniform(f32),
    North(f32),
    East(f32),
}

impl CornerSpec {
    /// Radii in `(north_west, north_east, south_east, south_west)` order.
    pub fn radii(&self) -> [f32; 4] {
        match *self {
            CornerSpec::Square     => [0.0, 0.0, 0.0, 0.0],
            CornerSpec::Uniform(v) => [v, v, v, v],
            CornerSpec::North(v)   => [v, v, 0.0, 0.0],
            CornerSpec::East(v)    => [0.0, v, v, 0.0],
        }
    }
}

/// Battery shape orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Vertical battery, cap on top.
    #[default]
    Portrait,
    /// Horizontal battery, cap on the right.
    Landscape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let r = Rect::new(10, 20, 40, 100);
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 80);
        assert_eq!(r.center(), (25.0, 60.0));
        assert!(!r.is_empty());
        assert!(Rect::new(5, 5, 5, 10).is_empty());
    }

    #[test]
    fn corner_radii_order() {
        assert_eq!(CornerSpec::North(4.0).radii(), [4.0, 4.0, 0.0, 0.0]);
        assert_eq!(CornerSpec::East(4.0).radii(), [0.0, 4.0, 4.0, 0.0]);
        assert_eq!(CornerSpec::Uniform(2.0).radii(), [2.0; 4]);
        assert_eq!(CornerSpec::Square.radii(), [0.0; 4]);
    }
}
