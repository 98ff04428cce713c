//! Geometric primitives in the canonical drawing space.
//!
//! Everything in this crate speaks GL clip space: origin at the canvas
//! center, x in `[-1, 1]` growing right, y in `[-1, 1]` growing up.
//! Angles are radians, counter-clockwise, with 0 along +X.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
