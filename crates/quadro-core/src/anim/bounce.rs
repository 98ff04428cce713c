/// Scalar that walks between two walls, one step per frame.
///
/// The wall check runs before the step, so the value leaves the range
/// by at most one `step` and turns around on the next frame. Frames,
/// not wall-clock time, drive the motion; pacing belongs to whatever
/// loop schedules them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounce {
    pub value: f32,
    /// Signed step applied each frame; the sign flips at the walls.
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Bounce {
    #[inline]
    pub const fn new(value: f32, step: f32, min: f32, max: f32) -> Self {
        Self { value, step, min, max }
    }

    /// Next frame's state.
    #[must_use]
    pub fn stepped(self) -> Self {
        let step = if self.value > self.max || self.value < self.min {
            -self.step
        } else {
            self.step
        };
        Self { value: self.value + step, step, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Steps are powers of two so the walks below are exact in f32.

    #[test]
    fn walks_up_inside_the_range() {
        let b = Bounce::new(0.0, 0.5, -1.0, 1.0).stepped().stepped();
        assert_eq!(b.value, 1.0);
        assert_eq!(b.step, 0.5);
    }

    #[test]
    fn overshoots_one_step_then_turns_around() {
        let mut b = Bounce::new(1.0, 0.5, -1.0, 1.0);
        b = b.stepped();
        // 1.0 is still inside, so the step goes through before the flip.
        assert_eq!(b.value, 1.5);
        b = b.stepped();
        assert_eq!(b.value, 1.0);
        assert_eq!(b.step, -0.5);
        b = b.stepped();
        assert_eq!(b.value, 0.5);
    }

    #[test]
    fn turns_around_at_the_lower_wall_too() {
        let mut b = Bounce::new(-1.5, -0.5, -1.0, 1.0);
        b = b.stepped();
        assert_eq!(b.value, -1.0);
        assert_eq!(b.step, 0.5);
    }

    #[test]
    fn full_cycle_returns_to_the_start() {
        let start = Bounce::new(0.0, 0.25, -1.0, 1.0);
        let mut b = start;
        // Period: up 0->1.25 (5), down to -1.25 (10), back to 0 (5).
        for _ in 0..20 {
            b = b.stepped();
        }
        assert_eq!(b, start);
    }

    #[test]
    fn zero_step_is_a_fixed_point() {
        let b = Bounce::new(0.3, 0.0, -1.0, 1.0);
        assert_eq!(b.stepped(), b);
    }
}
