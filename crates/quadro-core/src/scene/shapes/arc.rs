use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::tess::Sweep;

/// Fan-arc draw payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcCmd {
    pub segments: u32,
    pub radius: f32,
    pub center: Vec2,
    pub sweep: Sweep,
    /// Radians, CCW about `center`.
    pub rotation: f32,
    pub color: Color,
}

impl ArcCmd {
    #[inline]
    pub const fn new(
        segments: u32,
        radius: f32,
        center: Vec2,
        sweep: Sweep,
        rotation: f32,
        color: Color,
    ) -> Self {
        Self { segments, radius, center, sweep, rotation, color }
    }
}

impl DrawList {
    /// Records an unrotated fan arc.
    #[inline]
    pub fn push_arc(
        &mut self,
        segments: u32,
        radius: f32,
        center: Vec2,
        sweep: Sweep,
        color: Color,
    ) {
        self.push_arc_rotated(segments, radius, center, sweep, 0.0, color);
    }

    /// Records a fan arc spun about its own center.
    #[inline]
    pub fn push_arc_rotated(
        &mut self,
        segments: u32,
        radius: f32,
        center: Vec2,
        sweep: Sweep,
        rotation: f32,
        color: Color,
    ) {
        self.push(DrawCmd::Arc(ArcCmd::new(segments, radius, center, sweep, rotation, color)));
    }
}
