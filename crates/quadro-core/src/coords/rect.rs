use super::Vec2;

/// Axis-aligned rectangle: corner plus extent, in clip-space units.
///
/// `size` may be negative on either axis. Nothing here normalizes it;
/// tessellation simply mirrors the quad across `origin`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// The `origin` corner.
    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    /// The corner diagonally opposite `origin`.
    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }
}
