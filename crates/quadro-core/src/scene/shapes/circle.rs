use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Filled-disc draw payload. Parameter order mirrors
/// [`Mesh::circle`](crate::tess::Mesh::circle).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleCmd {
    pub segments: u32,
    pub radius: f32,
    pub center: Vec2,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub const fn new(segments: u32, radius: f32, center: Vec2, color: Color) -> Self {
        Self { segments, radius, center, color }
    }
}

impl DrawList {
    /// Records a filled disc.
    ///
    /// Segment validity is checked at assembly, not here; recording
    /// never fails.
    #[inline]
    pub fn push_circle(&mut self, segments: u32, radius: f32, center: Vec2, color: Color) {
        self.push(DrawCmd::Circle(CircleCmd::new(segments, radius, center, color)));
    }
}
