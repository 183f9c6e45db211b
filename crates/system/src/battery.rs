use batt_core::{BattError, Result};
use std::path::Path;
use tracing::debug;

/// Charging status as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Unknown,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

impl ChargeStatus {
    /// Decode an Android `BatteryManager.EXTRA_STATUS` code.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => ChargeStatus::Charging,
            3 => ChargeStatus::Discharging,
            4 => ChargeStatus::NotCharging,
            5 => ChargeStatus::Full,
            _ => ChargeStatus::Unknown,
        }
    }

    /// Decode the contents of a Linux `power_supply/*/status` file.
    pub fn from_sysfs(status: &str) -> Self {
        match status.trim() {
            "Charging"     => ChargeStatus::Charging,
            "Discharging"  => ChargeStatus::Discharging,
            "Not charging" => ChargeStatus::NotCharging,
            "Full"         => ChargeStatus::Full,
            _              => ChargeStatus::Unknown,
        }
    }

    /// Full on external power counts as charging.
    pub fn is_charging(self) -> bool {
        matches!(self, ChargeStatus::Charging | ChargeStatus::Full)
    }
}

/// One battery notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Charge in percent, rounded to two decimals.
    pub percent: f32,
    pub status:  ChargeStatus,
}

impl BatteryReading {
    /// Build a reading from the raw `level` / `scale` pair and status code of
    /// a battery-changed broadcast.
    pub fn from_intent(level: i32, scale: i32, status_code: i32) -> Result<Self> {
        if level < 0 || scale <= 0 {
            return Err(BattError::System(format!(
                "invalid battery level {level}/{scale}"
            )));
        }
        let percent = f64::from(level) / f64::from(scale) * 100.0;
        Ok(Self {
            percent: ((percent * 100.0).round() / 100.0) as f32,
            status:  ChargeStatus::from_code(status_code),
        })
    }

    pub fn is_charging(&self) -> bool {
        self.status.is_charging()
    }

    /// Charge as a fraction in `[0, 1]`, the shape the indicator consumes.
    pub fn fraction(&self) -> f32 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

/// Read battery state from the Linux sysfs power-supply interface.
///
/// Returns the first battery found, or `None` if the system has no battery
/// (desktop, VM).
pub fn read_battery() -> Option<BatteryReading> {
    read_battery_in(Path::new("/sys/class/power_supply"))
}

fn read_battery_in(root: &Path) -> Option<BatteryReading> {
    for name in ["BAT0", "BAT1", "BAT2"] {
        let base = root.join(name);
        if !base.exists() {
            continue;
        }

        let capacity = std::fs::read_to_string(base.join("capacity")).ok()?;
        let status   = std::fs::read_to_string(base.join("status")).ok()?;

        let percent = capacity.trim().parse::<u8>().ok()?;
        let status  = ChargeStatus::from_sysfs(&status);
        debug!(battery = name, percent, ?status, "read battery");

        return Some(BatteryReading { percent: f32::from(percent), status });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use batt_core::BatteryState;

    fn state(r: &BatteryReading) -> BatteryState {
        BatteryState::from_fraction(r.fraction(), r.is_charging())
    }

    #[test]
    fn intent_with_scale_100() {
        let r = BatteryReading::from_intent(57, 100, 3).unwrap();
        assert_eq!(r.percent, 57.0);
        assert!(!r.is_charging());
        assert_eq!(state(&r), BatteryState::new(57, false));
    }

    #[test]
    fn intent_rounds_to_two_decimals() {
        let r = BatteryReading::from_intent(2, 3, 2).unwrap();
        assert_eq!(r.percent, 66.67);
        assert!(r.is_charging());
        assert_eq!(state(&r).charge_level, 67);
    }

    #[test]
    fn full_counts_as_charging() {
        assert!(BatteryReading::from_intent(100, 100, 5).unwrap().is_charging());
        assert!(!BatteryReading::from_intent(100, 100, 4).unwrap().is_charging());
        assert!(!BatteryReading::from_intent(100, 100, 1).unwrap().is_charging());
        assert_eq!(ChargeStatus::from_code(-1), ChargeStatus::Unknown);
    }

    #[test]
    fn invalid_intent_is_rejected() {
        assert!(matches!(BatteryReading::from_intent(-1, -1, 2), Err(BattError::System(_))));
        assert!(BatteryReading::from_intent(50, 0, 2).is_err());
    }

    #[test]
    fn fraction_is_clamped() {
        let r = BatteryReading { percent: 250.0, status: ChargeStatus::Unknown };
        assert_eq!(r.fraction(), 1.0);
        assert_eq!(state(&r).charge_level, 100);
    }

    #[test]
    fn sysfs_status_strings() {
        assert_eq!(ChargeStatus::from_sysfs("Charging\n"), ChargeStatus::Charging);
        assert_eq!(ChargeStatus::from_sysfs("Not charging"), ChargeStatus::NotCharging);
        assert_eq!(ChargeStatus::from_sysfs("???"), ChargeStatus::Unknown);
    }

    #[test]
    fn sysfs_reader_finds_first_battery() {
        let root = std::env::temp_dir().join(format!("batt-sysfs-{}", std::process::id()));
        let bat = root.join("BAT1");
        std::fs::create_dir_all(&bat).unwrap();
        std::fs::write(bat.join("capacity"), "81\n").unwrap();
        std::fs::write(bat.join("status"), "Full\n").unwrap();

        let reading = read_battery_in(&root);
        std::fs::remove_dir_all(&root).ok();

        let reading = reading.unwrap();
        assert_eq!(reading.percent, 81.0);
        assert_eq!(reading.status, ChargeStatus::Full);
    }

    #[test]
    fn sysfs_without_battery() {
        assert!(read_battery_in(Path::new("/nonexistent/power_supply")).is_none());
    }
}
