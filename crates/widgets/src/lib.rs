pub mod battery;
pub mod icons;

pub use battery::BatteryIndicator;
pub use icons::{IconCache, IconSource};
