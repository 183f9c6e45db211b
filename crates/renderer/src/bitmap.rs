use batt_core::{BattError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Straight-alpha RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width:  u32,
    pub height: u32,
    pub data:   Vec<u8>,
}

/// Edge length of the built-in glyphs.
const GLYPH_SIZE: u32 = 48;
const GLYPH_COLOR: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; 4 * (width as usize) * (height as usize)],
        }
    }

    pub fn from_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| BattError::Icon(format!("cannot open '{}': {e}", path.display())))?;
        Self::decode_png(BufReader::new(file))
    }

    /// Decode any 8- or 16-bit PNG into RGBA8.
    pub fn decode_png<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e| BattError::Icon(format!("PNG header: {e}")))?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| BattError::Icon(format!("PNG data: {e}")))?;

        let samples = match info.color_type {
            png::ColorType::Grayscale      => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb            => 3,
            png::ColorType::Rgba           => 4,
            png::ColorType::Indexed => {
                return Err(BattError::Icon("PNG palette was not expanded".into()));
            }
        };

        let mut bitmap = Self::new(info.width, info.height);
        for (y, row) in buf.chunks(info.line_size).take(info.height as usize).enumerate() {
            for (x, px) in row.chunks(samples).take(info.width as usize).enumerate() {
                let rgba = match *px {
                    [g]          => [g, g, g, 0xFF],
                    [g, a]       => [g, g, g, a],
                    [r, g, b]    => [r, g, b, 0xFF],
                    [r, g, b, a] => [r, g, b, a],
                    _ => continue,
                };
                bitmap.set_pixel(x as u32, y as u32, rgba);
            }
        }
        Ok(bitmap)
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0; 4];
        }
        let addr = 4 * (y as usize * self.width as usize + x as usize);
        [self.data[addr], self.data[addr + 1], self.data[addr + 2], self.data[addr + 3]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let addr = 4 * (y as usize * self.width as usize + x as usize);
        self.data[addr..addr + 4].copy_from_slice(&rgba);
    }

    /// Built-in lightning bolt, pointing up.
    pub fn charging_glyph() -> Self {
        const BOLT: [(f32, f32); 6] = [
            (0.62, 0.02),
            (0.18, 0.56),
            (0.46, 0.56),
            (0.38, 0.98),
            (0.84, 0.42),
            (0.56, 0.42),
        ];
        Self::rasterize(|u, v| inside_polygon(&BOLT, u, v))
    }

    /// Built-in exclamation mark, pointing up.
    pub fn warning_glyph() -> Self {
        Self::rasterize(|u, v| {
            let bar = (0.42..=0.58).contains(&u) && (0.08..=0.66).contains(&v);
            let (du, dv) = (u - 0.5, v - 0.84);
            bar || du * du + dv * dv <= 0.09 * 0.09
        })
    }

    /// Sample `inside` at every pixel center of a square glyph.
    fn rasterize(inside: impl Fn(f32, f32) -> bool) -> Self {
        let mut glyph = Self::new(GLYPH_SIZE, GLYPH_SIZE);
        let n = GLYPH_SIZE as f32;
        for y in 0..GLYPH_SIZE {
            for x in 0..GLYPH_SIZE {
                if inside((x as f32 + 0.5) / n, (y as f32 + 0.5) / n) {
                    glyph.set_pixel(x, y, GLYPH_COLOR);
                }
            }
        }
        glyph
    }
}

/// Even-odd point-in-polygon test.
fn inside_polygon(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn decode_rgba_png() {
        let data = [255, 0, 0, 255, 0, 255, 0, 128];
        let bytes = encode_png(2, 1, png::ColorType::Rgba, &data);
        let bitmap = Bitmap::decode_png(bytes.as_slice()).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (2, 1));
        assert_eq!(bitmap.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(bitmap.pixel(1, 0), [0, 255, 0, 128]);
    }

    #[test]
    fn decode_grayscale_png_expands_to_rgba() {
        let bytes = encode_png(1, 2, png::ColorType::Grayscale, &[10, 200]);
        let bitmap = Bitmap::decode_png(bytes.as_slice()).unwrap();
        assert_eq!(bitmap.pixel(0, 1), [200, 200, 200, 255]);
    }

    #[test]
    fn garbage_is_an_icon_error() {
        let err = Bitmap::decode_png(&b"definitely not a png"[..]).unwrap_err();
        assert!(matches!(err, BattError::Icon(_)));
    }

    #[test]
    fn missing_file_is_an_icon_error() {
        let err = Bitmap::from_png("/nonexistent/icon.png").unwrap_err();
        assert!(matches!(err, BattError::Icon(_)));
    }

    #[test]
    fn builtin_glyphs_have_ink() {
        for glyph in [Bitmap::charging_glyph(), Bitmap::warning_glyph()] {
            assert_eq!((glyph.width, glyph.height), (GLYPH_SIZE, GLYPH_SIZE));
            assert!(glyph.data.chunks(4).any(|px| px[3] == 0xFF));
            assert_eq!(glyph.pixel(0, 0)[3], 0);
        }
        // The exclamation mark's dot sits below its bar.
        let warning = Bitmap::warning_glyph();
        assert_eq!(warning.pixel(24, 40)[3], 0xFF);
        assert_eq!(warning.pixel(24, 34)[3], 0);
    }
}
