use serde::Serialize;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const NORMAL_BG:     Self = Self::rgb8(0x86, 0xB6, 0xF6);
    pub const NORMAL_LEVEL:  Self = Self::rgb8(0x4E, 0x94, 0xF1);
    pub const WARNING_BG:    Self = Self::rgb8(0xFF, 0xCF, 0x96);
    pub const WARNING_LEVEL: Self = Self::rgb8(0xF5, 0xAD, 0x56);
    pub const CRITICAL_BG:   Self = Self::rgb8(0xEF, 0x53, 0x50);
    pub const CRITICAL_LEVEL: Self = Self::rgb8(0xB7, 0x1C, 0x1C);
    pub const CHARGING_BG:   Self = Self::rgb8(0x89, 0xEC, 0x9E);
    pub const CHARGING_LEVEL: Self = Self::rgb8(0x4D, 0xD8, 0x6C);

    /// Opaque colour from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Some(Self {
                a: byte(&hex[6..8])? as f32 / 255.0,
                ..Self::rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)
            }),
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA for pixel buffers.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}
