//! Battery-status collaborator.
//!
//! Turns platform battery notifications into [`BatteryState`] values for the
//! indicator.  The indicator never calls into this crate on its own; the host
//! decides when to read.
//!
//! [`BatteryState`]: batt_core::BatteryState

pub mod battery;

pub use battery::{read_battery, BatteryReading, ChargeStatus};
