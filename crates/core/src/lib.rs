pub mod error;
pub mod event;
pub mod geom;
pub mod state;
pub mod widget;

pub use error::{BattError, Result};
pub use event::Message;
pub use geom::{CornerSpec, Orientation, Rect, Size};
pub use state::BatteryState;
pub use widget::Widget;
