use quadro_core::anim::Bounce;
use quadro_core::coords::{Rect, Vec2};
use quadro_core::paint::Color;
use quadro_core::scene::DrawList;
use quadro_core::tess::Sweep;
use quadro_core::transform::Mat4;

/// Fan and disc resolution for every curved piece of the car.
const SEGMENTS: u32 = 50;

const BODY: Color = Color::new(0.17, 0.356, 0.530);
const WINDOW: Color = Color::new(0.57, 0.56, 0.830);
const BUMPER: Color = Color::new(0.7, 0.556, 0.530);
const HANDLE: Color = Color::new(0.75, 0.75, 0.75);
const HEADLIGHT: Color = Color::new(0.9, 0.9, 0.9);
const TAILLIGHT: Color = Color::new(0.9, 0.2, 0.2);
const TIRE: Color = Color::new(0.1, 0.1, 0.1);
const HUBCAP: Color = Color::new(0.5, 0.5, 0.5);

/// A stylized car drifting around the canvas.
///
/// The whole drawing rides one translation; `drift` moves it on x and
/// `lift` on y, each bouncing off the clip-space walls. The body spans
/// x in `[-0.7, 0.7]`, so the drawing leaves the viewport near the
/// extremes, exactly as wall-clipped as it looks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CarScene {
    pub drift: Bounce,
    pub lift: Bounce,
}

impl CarScene {
    pub fn new() -> Self {
        Self {
            drift: Bounce::new(0.0, 0.01, -1.0, 1.0),
            lift: Bounce::new(0.0, 0.02, -1.0, 1.0),
        }
    }

    /// Next frame's state.
    #[must_use]
    pub fn stepped(self) -> Self {
        Self { drift: self.drift.stepped(), lift: self.lift.stepped() }
    }

    /// Records one frame of the car, back to front.
    pub fn record(&self, list: &mut DrawList) {
        log::trace!("car at ({:+.3}, {:+.3})", self.drift.value, self.lift.value);
        list.set_transform(Mat4::identity().translate(self.drift.value, self.lift.value, 0.0));

        // Roof, then the window dome inset into it.
        list.push_arc(SEGMENTS, 0.5, Vec2::new(0.0, -0.1), Sweep::TOP, BODY);
        list.push_arc(SEGMENTS, 0.4, Vec2::new(0.0, -0.1), Sweep::TOP, WINDOW);

        // Window divider, body slab, door handle.
        list.push_rect(Rect::new(-0.05, -0.55, 0.06, 0.85), BODY);
        list.push_rect(Rect::new(-0.5, -0.55, 1.0, 0.5), BODY);
        list.push_rect(Rect::new(-0.15, -0.2, 0.1, 0.04), HANDLE);

        // Rounded nose and tail, each with a small bumper arc below.
        list.push_arc(SEGMENTS, 0.25, Vec2::new(-0.48, -0.30), Sweep::LEFT, BODY);
        list.push_arc(SEGMENTS, 0.05, Vec2::new(-0.69, -0.50), Sweep::LEFT, BUMPER);
        list.push_arc(SEGMENTS, 0.05, Vec2::new(0.69, -0.50), Sweep::RIGHT, BUMPER);
        list.push_arc(SEGMENTS, 0.25, Vec2::new(0.48, -0.30), Sweep::RIGHT, BODY);

        // Rocker strip along the bottom.
        list.push_rect(Rect::new(-0.7, -0.55, 1.4, 0.1), BUMPER);

        // Lights: full disc up front, half disc at the tail.
        list.push_circle(SEGMENTS, 0.07, Vec2::new(-0.65, -0.3), HEADLIGHT);
        list.push_arc(SEGMENTS, 0.07, Vec2::new(0.65, -0.3), Sweep::RIGHT, TAILLIGHT);

        // Wheels last so they overlap the skirt: tires then hubcaps,
        // front then rear.
        list.push_circle(SEGMENTS, 0.2, Vec2::new(-0.35, -0.5), TIRE);
        list.push_circle(SEGMENTS, 0.2, Vec2::new(0.35, -0.5), TIRE);
        list.push_circle(SEGMENTS, 0.1, Vec2::new(-0.35, -0.5), HUBCAP);
        list.push_circle(SEGMENTS, 0.1, Vec2::new(0.35, -0.5), HUBCAP);
    }
}

impl Default for CarScene {
    fn default() -> Self {
        Self::new()
    }
}
