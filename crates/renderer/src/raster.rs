use crate::bitmap::Bitmap;
use crate::plan::Rotation;
use crate::surface::Surface;
use batt_core::{BattError, CornerSpec, Rect, Result};
use batt_theme::Color;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Software RGBA surface.  Starts fully transparent.
#[derive(Debug, Clone)]
pub struct Canvas {
    bitmap: Bitmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { bitmap: Bitmap::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.bitmap.pixel(x, y)
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }

    pub fn write_png<W: Write>(&self, out: W) -> Result<()> {
        let mut encoder = png::Encoder::new(out, self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| BattError::Render(format!("PNG header: {e}")))?;
        writer
            .write_image_data(&self.bitmap.data)
            .map_err(|e| BattError::Render(format!("PNG data: {e}")))?;
        writer
            .finish()
            .map_err(|e| BattError::Render(format!("PNG trailer: {e}")))
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_png(BufWriter::new(file))?;
        debug!("wrote {}x{} PNG to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    /// Source-over blend of `color` scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        let sa = color.a * coverage;
        if sa <= 0.0 {
            return;
        }
        let dst = self.bitmap.pixel(x, y);
        let da = f32::from(dst[3]) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let mix = |s: f32, d: u8| {
            let d = f32::from(d) / 255.0;
            ((s * sa + d * da * (1.0 - sa)) / out_a * 255.0).round() as u8
        };
        self.bitmap.set_pixel(x, y, [
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }

    /// Pixel range of `[lo, hi)` clipped to `0..limit`.
    fn clip(lo: f32, hi: f32, limit: u32) -> std::ops::Range<u32> {
        let lo = lo.floor().max(0.0) as u32;
        let hi = (hi.ceil().max(0.0) as u32).min(limit);
        lo..hi.max(lo)
    }
}

impl Surface for Canvas {
    fn fill_shape(&mut self, rect: &Rect, corners: &CornerSpec, color: Color) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let max_radius = rect.width().min(rect.height()) as f32 / 2.0;
        let [nw, ne, se, sw] = corners.radii().map(|r| r.clamp(0.0, max_radius));
        let (l, t) = (rect.left as f32, rect.top as f32);
        let (r, b) = (rect.right as f32, rect.bottom as f32);

        for y in Self::clip(t, b, self.height()) {
            for x in Self::clip(l, r, self.width()) {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                let pole = if px < l + nw && py < t + nw {
                    Some((l + nw, t + nw, nw))
                } else if px > r - ne && py < t + ne {
                    Some((r - ne, t + ne, ne))
                } else if px > r - se && py > b - se {
                    Some((r - se, b - se, se))
                } else if px < l + sw && py > b - sw {
                    Some((l + sw, b - sw, sw))
                } else {
                    None
                };
                let coverage = match pole {
                    Some((cx, cy, radius)) => (radius - (px - cx).hypot(py - cy) + 0.5).clamp(0.0, 1.0),
                    None => 1.0,
                };
                self.blend(x, y, color, coverage);
            }
        }
        Ok(())
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, rect: &Rect, rotation: Rotation) -> Result<()> {
        if rect.is_empty() || bitmap.width == 0 || bitmap.height == 0 {
            return Ok(());
        }
        let (cx, cy) = rect.center();
        let (w, h) = (rect.width() as f32, rect.height() as f32);
        let (hw, hh) = (w / 2.0, h / 2.0);
        // Half extents of the rotated rectangle on screen.
        let (bx, by) = match rotation {
            Rotation::Upright => (hw, hh),
            Rotation::Cw90 | Rotation::Cw270 => (hh, hw),
        };

        for y in Self::clip(cy - by, cy + by, self.height()) {
            for x in Self::clip(cx - bx, cx + bx, self.width()) {
                let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                // Undo the clockwise rotation to find the bitmap-space offset.
                let (u, v) = match rotation {
                    Rotation::Upright => (dx, dy),
                    Rotation::Cw90    => (dy, -dx),
                    Rotation::Cw270   => (-dy, dx),
                };
                if u < -hw || u >= hw || v < -hh || v >= hh {
                    continue;
                }
                let sx = (((u + hw) / w * bitmap.width as f32) as u32).min(bitmap.width - 1);
                let sy = (((v + hh) / h * bitmap.height as f32) as u32).min(bitmap.height - 1);
                let [r, g, b, a] = bitmap.pixel(sx, sy);
                let color = Color {
                    r: f32::from(r) / 255.0,
                    g: f32::from(g) / 255.0,
                    b: f32::from(b) / 255.0,
                    a: f32::from(a) / 255.0,
                };
                self.blend(x, y, color, 1.0);
            }
        }
        Ok(())
    }
}
