//! Per-shape draw payloads and their [`DrawList`](crate::scene::DrawList)
//! push helpers, one file per shape.

mod arc;
mod circle;
mod rect;
mod trapezoid;

pub use arc::ArcCmd;
pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use trapezoid::TrapezoidCmd;
