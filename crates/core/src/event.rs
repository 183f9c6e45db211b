use crate::geom::Orientation;

/// All messages a host can send to an indicator widget.
///
/// Sources:
/// - Battery-status collaborator → `BatteryStatus`
/// - Host UI code               → `ChargeLevel`, `Charging`, `Orientation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ── Battery status ────────────────────────────────────────────────────────
    /// Fresh reading from the platform: charge fraction in `[0, 1]` and
    /// whether the device is charging (or full).
    BatteryStatus { fraction: f32, charging: bool },

    // ── Direct state updates ──────────────────────────────────────────────────
    /// Set the charge level in percent.  Out-of-range values are clamped.
    ChargeLevel(i32),
    /// Set the charging flag.
    Charging(bool),

    // ── Configuration ─────────────────────────────────────────────────────────
    /// Switch between the vertical and the horizontal battery shape.
    Orientation(Orientation),
}
