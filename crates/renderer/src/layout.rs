use batt_core::{Orientation, Rect, Size};

/// Share of the long axis taken by the cap, in percent.
pub const CAP_LONG_PERCENT: i32 = 10;
/// Share of the short axis taken by the cap, in percent.
pub const CAP_SHORT_PERCENT: i32 = 50;

/// The fixed rectangles of one frame.
///
/// Recomputed whenever the bounds or the orientation change; holds no other
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub orientation: Orientation,
    /// Battery body (the larger part of the shell).
    pub body:        Rect,
    /// Battery terminal, on top in portrait and on the right in landscape.
    pub cap:         Rect,
    /// Span the body fill is measured against: the full long axis by the
    /// body's short axis.
    pub fill_bounds: Rect,
    /// Where the charging or warning glyph goes.
    pub icon:        Rect,
}

impl Layout {
    pub fn compute(bounds: Size, orientation: Orientation) -> Self {
        let w = to_px(bounds.width);
        let h = to_px(bounds.height);
        let margin = (100 - CAP_SHORT_PERCENT) / 2;

        match orientation {
            Orientation::Portrait => {
                // Same rounding as the landscape junction so the two mirror.
                let cap_bottom = h - percent_of(h, 100 - CAP_LONG_PERCENT);
                let cap_inset  = percent_of(w, margin);
                Self {
                    orientation,
                    body:        Rect::new(0, cap_bottom, w, h),
                    cap:         Rect::new(cap_inset, 0, w - cap_inset, cap_bottom),
                    fill_bounds: Rect::new(0, 0, w, h),
                    icon:        Rect::new(
                        percent_of(w, 25),
                        percent_of(h, 25),
                        percent_of(w, 75),
                        percent_of(h, 75),
                    ),
                }
            }
            Orientation::Landscape => {
                let body_right = percent_of(w, 100 - CAP_LONG_PERCENT);
                let cap_inset  = percent_of(h, margin);
                Self {
                    orientation,
                    body:        Rect::new(0, 0, body_right, h),
                    cap:         Rect::new(body_right, cap_inset, w, h - cap_inset),
                    fill_bounds: Rect::new(0, 0, w, h),
                    // Wider than tall: the glyph is drawn rotated.
                    icon:        Rect::new(
                        percent_of(w, 35),
                        percent_of(h, 5),
                        percent_of(w, 65),
                        percent_of(h, 95),
                    ),
                }
            }
        }
    }

    /// Length of the fill span along the growth axis.
    pub fn fill_span(&self) -> i32 {
        match self.orientation {
            Orientation::Portrait  => self.fill_bounds.height(),
            Orientation::Landscape => self.fill_bounds.width(),
        }
    }
}

/// `value · percent / 100`, truncated.
#[inline]
pub(crate) fn percent_of(value: i32, percent: i32) -> i32 {
    (i64::from(value) * i64::from(percent) / 100) as i32
}

#[inline]
fn to_px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Rotate a portrait rectangle a quarter turn clockwise inside a box of
    /// height `h`, so the top edge ends up on the right.
    pub(crate) fn rotated_cw(r: Rect, h: i32) -> Rect {
        Rect::new(h - r.bottom, r.left, h - r.top, r.right)
    }

    #[test]
    fn portrait_rectangles() {
        let l = Layout::compute(Size::new(50, 100), Orientation::Portrait);
        assert_eq!(l.cap, Rect::new(12, 0, 38, 10));
        assert_eq!(l.body, Rect::new(0, 10, 50, 100));
        assert_eq!(l.fill_bounds, Rect::new(0, 0, 50, 100));
        assert_eq!(l.icon, Rect::new(12, 25, 37, 75));
        assert_eq!(l.fill_span(), 100);
    }

    #[test]
    fn landscape_rectangles() {
        let l = Layout::compute(Size::new(100, 50), Orientation::Landscape);
        assert_eq!(l.body, Rect::new(0, 0, 90, 50));
        assert_eq!(l.cap, Rect::new(90, 12, 100, 38));
        assert_eq!(l.icon, Rect::new(35, 2, 65, 47));
        assert_eq!(l.fill_span(), 100);
    }

    #[test]
    fn body_and_cap_meet_without_gap() {
        for (w, h) in [(33, 67), (50, 100), (81, 163)] {
            let p = Layout::compute(Size::new(w, h), Orientation::Portrait);
            assert_eq!(p.cap.bottom, p.body.top);
            let l = Layout::compute(Size::new(h, w), Orientation::Landscape);
            assert_eq!(l.cap.left, l.body.right);
        }
    }

    #[test]
    fn landscape_is_portrait_rotated() {
        for (w, h) in [(60, 120), (62, 125), (33, 67)] {
            let p = Layout::compute(Size::new(w, h), Orientation::Portrait);
            let l = Layout::compute(Size::new(h, w), Orientation::Landscape);
            let h = h as i32;
            assert_eq!(rotated_cw(p.body, h), l.body, "{w}x{h}");
            assert_eq!(rotated_cw(p.cap, h), l.cap, "{w}x{h}");
            assert_eq!(rotated_cw(p.fill_bounds, h), l.fill_bounds, "{w}x{h}");
        }
    }

    #[test]
    fn odd_long_axis_keeps_cap_length() {
        // 125 px at 10 % is 12.5: both orientations give the cap 13 px.
        let p = Layout::compute(Size::new(62, 125), Orientation::Portrait);
        let l = Layout::compute(Size::new(125, 62), Orientation::Landscape);
        assert_eq!(p.cap, Rect::new(15, 0, 47, 13));
        assert_eq!(p.body.top, 13);
        assert_eq!(p.cap.height(), l.cap.width());
    }

    #[test]
    fn zero_bounds_give_empty_rectangles() {
        let l = Layout::compute(Size::default(), Orientation::Portrait);
        assert!(l.body.is_empty());
        assert!(l.cap.is_empty());
        assert!(l.icon.is_empty());
    }
}
