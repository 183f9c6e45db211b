use crate::bitmap::Bitmap;
use crate::plan::Rotation;
use batt_core::{CornerSpec, Rect, Result};
use batt_theme::Color;

/// A 2D drawing backend able to execute a [`DrawPlan`](crate::DrawPlan).
///
/// Implementations clip to their own extent.  An error aborts the current
/// frame only.
pub trait Surface {
    /// Fill `rect` with `color`, rounding the corners named by `corners`.
    fn fill_shape(&mut self, rect: &Rect, corners: &CornerSpec, color: Color) -> Result<()>;

    /// Scale `bitmap` into `rect`, then rotate it clockwise around the
    /// rectangle's center.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, rect: &Rect, rotation: Rotation) -> Result<()>;
}
