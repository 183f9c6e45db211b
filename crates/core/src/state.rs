use tracing::warn;

/// Mutable indicator state, set by the host or by the battery-status
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryState {
    /// Charge level in percent, always within `0..=100`.
    pub charge_level: u8,
    /// `true` while charging (or full on external power).
    pub is_charging: bool,
}

impl BatteryState {
    /// Build a state from a raw percent.  Values outside `0..=100` are
    /// clamped with a warning; the geometry is undefined for them.
    pub fn new(level: i32, is_charging: bool) -> Self {
        let charge_level = clamp_level(level);
        if i32::from(charge_level) != level {
            warn!(level, clamped = charge_level, "charge level out of range; clamping");
        }
        Self { charge_level, is_charging }
    }

    /// Build a state from a charge fraction in `[0, 1]`, rounded to the
    /// nearest whole percent.  `NaN` reads as empty.
    pub fn from_fraction(fraction: f32, is_charging: bool) -> Self {
        let percent = if fraction.is_nan() {
            warn!("charge fraction is NaN; reading as empty");
            0
        } else {
            (fraction * 100.0).round() as i32
        };
        Self::new(percent, is_charging)
    }
}

#[inline]
fn clamp_level(level: i32) -> u8 {
    level.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range() {
        assert_eq!(BatteryState::new(-5, false).charge_level, 0);
        assert_eq!(BatteryState::new(150, true).charge_level, 100);
        assert_eq!(BatteryState::new(42, false).charge_level, 42);
    }

    #[test]
    fn from_fraction_rounds() {
        assert_eq!(BatteryState::from_fraction(0.556, false).charge_level, 56);
        assert_eq!(BatteryState::from_fraction(1.2, false).charge_level, 100);
        assert_eq!(BatteryState::from_fraction(f32::NAN, false).charge_level, 0);
        assert!(BatteryState::from_fraction(0.5, true).is_charging);
    }
}
