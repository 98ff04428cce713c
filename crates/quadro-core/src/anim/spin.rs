/// Unbounded angle accumulator, in degrees.
///
/// Degrees because spin rates read naturally that way ("2 degrees per
/// frame"); convert at the matrix boundary with
/// [`radians`](Spin::radians). The angle grows without wrapping, which
/// trig downstream is indifferent to.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    pub degrees: f32,
    /// Degrees added per frame; negative spins clockwise.
    pub step: f32,
}

impl Spin {
    #[inline]
    pub const fn new(degrees: f32, step: f32) -> Self {
        Self { degrees, step }
    }

    /// Next frame's state.
    #[must_use]
    pub fn stepped(self) -> Self {
        Self { degrees: self.degrees + self.step, ..self }
    }

    #[inline]
    pub fn radians(self) -> f32 {
        self.degrees.to_radians()
    }
}
