use std::f32::consts::PI;

use quadro_core::anim::Spin;
use quadro_core::coords::Vec2;
use quadro_core::paint::Color;
use quadro_core::scene::DrawList;
use quadro_core::tess::Sweep;
use quadro_core::transform::Mat4;

/// Fan and disc resolution for the petal tips and the flower heart.
const SEGMENTS: u32 = 100;

const STEM: Color = Color::new(0.0, 0.8, 0.0);
const PETAL: Color = Color::new(0.9, 0.8, 0.0);
const HEART: Color = Color::new(0.75, 0.5, 0.0);

/// Petal base placement: trapezoid center and rotation, one entry per
/// compass direction going CCW from north.
const PETAL_BASES: [(f32, f32, f32); 8] = [
    (0.0, 0.12, 0.0),
    (-0.1, 0.09, PI * 0.25),
    (-0.12, 0.0, PI * 0.5),
    (-0.1, -0.11, PI * 0.75),
    (0.0, -0.14, PI),
    (0.1, -0.11, PI * 1.25),
    (0.12, 0.0, PI * 1.5),
    (0.1, 0.11, PI * 1.75),
];

/// Rounded petal tips: half-disc center and rotation, paired with
/// `PETAL_BASES` by index. The centers are hand-placed, not derived,
/// which is why they are not perfectly symmetric.
const PETAL_TIPS: [(f32, f32, f32); 8] = [
    (0.0, 0.6, 0.0),
    (-0.45, 0.44, PI * 0.25),
    (-0.61, 0.0, PI * 0.5),
    (-0.45, -0.46, PI * 0.75),
    (0.0, -0.627, PI),
    (0.45, -0.46, PI * 1.25),
    (0.61, 0.0, PI * 1.5),
    (0.45, 0.46, PI * 1.75),
];

/// A stylized flower: fixed stem, spinning head.
///
/// The stem stays put under the identity transform; the head (eight
/// petals, eight rounded tips, one heart disc) rides a z-rotation that
/// advances `spin.step` degrees per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlowerScene {
    pub spin: Spin,
}

impl FlowerScene {
    pub fn new() -> Self {
        Self { spin: Spin::new(0.0, 2.0) }
    }

    /// Next frame's state.
    #[must_use]
    pub fn stepped(self) -> Self {
        Self { spin: self.spin.stepped() }
    }

    /// Records one frame of the flower, stem first.
    pub fn record(&self, list: &mut DrawList) {
        log::trace!("flower head at {:.1} degrees", self.spin.degrees);

        // The stem leans slightly and does not spin with the head.
        list.set_transform(Mat4::identity());
        list.push_trapezoid(Vec2::new(-0.3, -1.1), 0.07, 0.07, 1.0, -0.25, STEM);

        list.set_transform(Mat4::identity().z_rotate(self.spin.radians()));
        for (cx, cy, rotation) in PETAL_BASES {
            list.push_trapezoid(Vec2::new(cx, cy), 0.4, 0.1, 0.5, rotation, PETAL);
        }
        for (cx, cy, rotation) in PETAL_TIPS {
            list.push_arc_rotated(SEGMENTS, 0.2, Vec2::new(cx, cy), Sweep::TOP, rotation, PETAL);
        }
        list.push_circle(SEGMENTS, 0.2, Vec2::zero(), HEART);
    }
}

impl Default for FlowerScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadro_core::scene::{DrawCmd, assemble};

    fn recorded(scene: FlowerScene) -> DrawList {
        let mut list = DrawList::new();
        scene.record(&mut list);
        list
    }

    #[test]
    fn records_eighteen_primitives() {
        let list = recorded(FlowerScene::new());
        assert_eq!(list.items().len(), 18);

        let traps =
            list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Trapezoid(_))).count();
        let arcs = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Arc(_))).count();
        let circles =
            list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Circle(_))).count();
        assert_eq!((traps, arcs, circles), (9, 8, 1));
    }

    #[test]
    fn stem_stays_fixed_while_the_head_spins() {
        let scene = FlowerScene { spin: Spin::new(90.0, 2.0) };
        let list = recorded(scene);

        assert_eq!(list.items()[0].transform, Mat4::identity());
        let head = Mat4::identity().z_rotate(scene.spin.radians());
        assert!(list.items()[1..].iter().all(|i| i.transform == head));
    }

    #[test]
    fn petal_tips_share_the_base_angles() {
        let list = recorded(FlowerScene::new());
        // Items 1..9 are bases, 9..17 the tips, in the same compass order.
        for k in 0..8 {
            let base = match list.items()[1 + k].cmd {
                DrawCmd::Trapezoid(t) => t.rotation,
                other => panic!("expected a petal base, got {other:?}"),
            };
            let tip = match list.items()[9 + k].cmd {
                DrawCmd::Arc(a) => a.rotation,
                other => panic!("expected a petal tip, got {other:?}"),
            };
            assert_eq!(base, tip);
        }
    }

    #[test]
    fn heart_is_painted_last() {
        let list = recorded(FlowerScene::new());
        match list.items()[17].cmd {
            DrawCmd::Circle(c) => {
                assert_eq!(c.center, Vec2::zero());
                assert_eq!(c.color, HEART);
            }
            other => panic!("expected the heart disc last, got {other:?}"),
        }
    }

    #[test]
    fn assembled_frame_has_a_fixed_vertex_total() {
        let prims = assemble(&recorded(FlowerScene::new())).unwrap();
        let vertices: usize = prims.iter().map(|p| p.vertex_count()).sum();
        // 9 quads of 6, 8 half-turn arcs of 102, 1 disc of 300.
        assert_eq!(vertices, 9 * 6 + 8 * 102 + 300);
    }

    #[test]
    fn spin_advances_two_degrees_per_frame() {
        let scene = FlowerScene::new().stepped().stepped();
        assert_eq!(scene.spin.degrees, 4.0);
    }
}
