use crate::{event::Message, geom::Size};

/// Common surface of every drawable indicator.
///
/// Widgets are reactive: the host feeds them `Message`s and asks them to
/// measure themselves.  Drawing needs a backend and lives on the concrete
/// type in `batt-widgets`.
pub trait Widget: std::fmt::Debug {
    /// Unique string identifier, e.g. `"battery"`.
    fn id(&self) -> &str;

    /// Apply a message.  Returns `true` when the widget needs a redraw.
    fn update(&mut self, message: Message) -> bool;

    /// Resolve the widget's pixel size inside `available` (0 = unconstrained).
    fn measure(&mut self, available: Size) -> Size;
}
