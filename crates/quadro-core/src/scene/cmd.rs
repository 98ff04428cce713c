use crate::paint::Color;
use crate::scene::shapes::{ArcCmd, CircleCmd, RectCmd, TrapezoidCmd};

/// One renderer-agnostic draw command.
///
/// Adding a shape touches three places: a payload struct plus push
/// helpers under `scene::shapes`, a variant here, and a tessellation arm
/// in [`assemble`](crate::scene::assemble).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Arc(ArcCmd),
    Trapezoid(TrapezoidCmd),
}

impl DrawCmd {
    /// Fill color the host binds for this command.
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            DrawCmd::Rect(c) => c.color,
            DrawCmd::Circle(c) => c.color,
            DrawCmd::Arc(c) => c.color,
            DrawCmd::Trapezoid(c) => c.color,
        }
    }
}
