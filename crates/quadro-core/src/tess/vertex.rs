use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// One 2D position, laid out for direct vertex-buffer upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex2 {
    pub pos: [f32; 2],
}

impl Vertex2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }
}

impl From<Vec2> for Vertex2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
