/// RGB fill color with components in `[0, 1]`.
///
/// Maps one-to-one onto a `vec3` fragment uniform. There is no alpha
/// channel and no blending anywhere in this crate's output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Component array in uniform order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
