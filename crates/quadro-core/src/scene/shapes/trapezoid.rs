use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Trapezoid draw payload. Geometry semantics are those of
/// [`Mesh::trapezoid`](crate::tess::Mesh::trapezoid).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrapezoidCmd {
    pub center: Vec2,
    pub top_width: f32,
    pub bottom_width: f32,
    pub height: f32,
    /// Radians, CCW about `center`.
    pub rotation: f32,
    pub color: Color,
}

impl TrapezoidCmd {
    #[inline]
    pub const fn new(
        center: Vec2,
        top_width: f32,
        bottom_width: f32,
        height: f32,
        rotation: f32,
        color: Color,
    ) -> Self {
        Self { center, top_width, bottom_width, height, rotation, color }
    }
}

impl DrawList {
    /// Records a filled trapezoid rotated about its base center.
    #[inline]
    pub fn push_trapezoid(
        &mut self,
        center: Vec2,
        top_width: f32,
        bottom_width: f32,
        height: f32,
        rotation: f32,
        color: Color,
    ) {
        self.push(DrawCmd::Trapezoid(TrapezoidCmd::new(
            center,
            top_width,
            bottom_width,
            height,
            rotation,
            color,
        )));
    }
}
