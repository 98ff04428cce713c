use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::tess::{Mesh, TessError, Topology, Vertex2};

/// Angular range of a fan arc, in half-turn units (multiples of pi).
///
/// `Sweep::new(0.5, 1.5)` covers 90 to 270 degrees. Fractional bounds
/// are fine; spans wider than a full turn just overlap themselves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sweep {
    pub start: f32,
    pub end: f32,
}

impl Sweep {
    /// 90 to 270 degrees: the half-disc bulging left of its center.
    pub const LEFT: Sweep = Sweep::new(0.5, 1.5);
    /// 270 to 450 degrees: the half-disc bulging right of its center.
    pub const RIGHT: Sweep = Sweep::new(1.5, 2.5);
    /// 0 to 180 degrees: the upper half-disc, flat edge down.
    pub const TOP: Sweep = Sweep::new(0.0, 1.0);

    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Half-turns covered, negative when `end` precedes `start`.
    #[inline]
    pub fn span(self) -> f32 {
        self.end - self.start
    }
}

impl Mesh {
    /// [`fan_arc_rotated`](Mesh::fan_arc_rotated) without the rotation.
    pub fn fan_arc(
        segments: u32,
        radius: f32,
        center: Vec2,
        sweep: Sweep,
    ) -> Result<Mesh, TessError> {
        Self::fan_arc_rotated(segments, radius, center, sweep, 0.0)
    }

    /// Triangle fan covering `sweep`, center vertex first.
    ///
    /// Rim points step `pi / segments` from `sweep.start` half-turns,
    /// both endpoints included, so a half-turn sweep yields
    /// `segments + 1` rim points whatever the segment count. `segments`
    /// is the resolution of a half turn, not of this particular arc;
    /// two arcs of different spans but equal `segments` have rims of
    /// equal angular density.
    ///
    /// Each rim point is rotated by `rotation` radians about `center`
    /// before placement, so the arc spins in place instead of orbiting
    /// the origin. An empty or negative span degenerates to a
    /// two-vertex fan, which draws nothing.
    pub fn fan_arc_rotated(
        segments: u32,
        radius: f32,
        center: Vec2,
        sweep: Sweep,
        rotation: f32,
    ) -> Result<Mesh, TessError> {
        if segments == 0 {
            return Err(TessError::InvalidSegmentCount { segments });
        }
        let steps = (sweep.span() * segments as f32).round().max(0.0) as u32;
        let mut vertices = Vec::with_capacity(steps as usize + 2);
        vertices.push(Vertex2::from(center));
        for i in 0..=steps {
            let angle = (sweep.start + i as f32 / segments as f32) * PI;
            let rim = Vec2::new(angle.cos(), angle.sin()) * radius;
            vertices.push(Vertex2::from(center + rim.rotated(rotation)));
        }
        Ok(Mesh { vertices, topology: Topology::TriangleFan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn pos(m: &Mesh, i: usize) -> (f32, f32) {
        (m.vertices[i].pos[0], m.vertices[i].pos[1])
    }

    fn assert_close(got: (f32, f32), want: (f32, f32)) {
        assert!(
            (got.0 - want.0).abs() < 1e-5 && (got.1 - want.1).abs() < 1e-5,
            "{got:?} vs {want:?}"
        );
    }

    // ── sampling ────────────────────────────────────────────────────────────

    #[test]
    fn top_half_with_two_segments_spans_the_diameter() {
        let m = Mesh::fan_arc(2, 1.0, Vec2::zero(), Sweep::TOP).unwrap();
        assert_eq!(m.topology, Topology::TriangleFan);
        assert_eq!(m.vertex_count(), 4);
        assert_close(pos(&m, 0), (0.0, 0.0));
        assert_close(pos(&m, 1), (1.0, 0.0));
        assert_close(pos(&m, 2), (0.0, 1.0));
        assert_close(pos(&m, 3), (-1.0, 0.0));
    }

    #[test]
    fn half_turn_presets_have_segments_plus_two_vertices() {
        for sweep in [Sweep::LEFT, Sweep::RIGHT, Sweep::TOP] {
            for segments in [1u32, 2, 3, 50, 101] {
                let m = Mesh::fan_arc(segments, 0.5, Vec2::zero(), sweep).unwrap();
                assert_eq!(m.vertex_count(), segments as usize + 2);
            }
        }
    }

    #[test]
    fn odd_segment_counts_still_hit_both_endpoints() {
        let m = Mesh::fan_arc(3, 1.0, Vec2::zero(), Sweep::TOP).unwrap();
        assert_eq!(m.vertex_count(), 5);
        assert_close(pos(&m, 1), (1.0, 0.0));
        assert_close(pos(&m, 4), (-1.0, 0.0));
    }

    #[test]
    fn left_preset_bulges_left() {
        let m = Mesh::fan_arc(2, 1.0, Vec2::new(0.2, 0.0), Sweep::LEFT).unwrap();
        assert_close(pos(&m, 1), (0.2, 1.0));
        assert_close(pos(&m, 2), (-0.8, 0.0));
        assert_close(pos(&m, 3), (0.2, -1.0));
    }

    #[test]
    fn right_preset_bulges_right() {
        let m = Mesh::fan_arc(2, 1.0, Vec2::zero(), Sweep::RIGHT).unwrap();
        assert_close(pos(&m, 1), (0.0, -1.0));
        assert_close(pos(&m, 2), (1.0, 0.0));
        assert_close(pos(&m, 3), (0.0, 1.0));
    }

    #[test]
    fn partial_span_rounds_to_the_grid() {
        // 0.3 half-turns at 10 segments per half-turn is 3 grid steps.
        let m = Mesh::fan_arc(10, 1.0, Vec2::zero(), Sweep::new(0.0, 0.3)).unwrap();
        assert_eq!(m.vertex_count(), 5);
        assert_close(pos(&m, 4), ((0.3 * PI).cos(), (0.3 * PI).sin()));
    }

    // ── rotation ────────────────────────────────────────────────────────────

    #[test]
    fn rotation_spins_about_the_center() {
        let center = Vec2::new(0.45, 0.44);
        let plain = Mesh::fan_arc(4, 0.2, center, Sweep::TOP).unwrap();
        let spun = Mesh::fan_arc_rotated(4, 0.2, center, Sweep::TOP, PI).unwrap();
        assert_close(pos(&spun, 0), (center.x, center.y));
        // A half-turn about the center negates every center-relative rim.
        for i in 1..plain.vertex_count() {
            let (px, py) = pos(&plain, i);
            let (sx, sy) = pos(&spun, i);
            assert_close((sx, sy), (2.0 * center.x - px, 2.0 * center.y - py));
        }
    }

    #[test]
    fn zero_rotation_matches_the_unrotated_form() {
        let a = Mesh::fan_arc(7, 0.3, Vec2::new(0.1, -0.2), Sweep::LEFT).unwrap();
        let b = Mesh::fan_arc_rotated(7, 0.3, Vec2::new(0.1, -0.2), Sweep::LEFT, 0.0).unwrap();
        assert_eq!(a, b);
    }

    // ── degenerate input ────────────────────────────────────────────────────

    #[test]
    fn zero_segments_is_rejected() {
        assert_eq!(
            Mesh::fan_arc(0, 1.0, Vec2::zero(), Sweep::TOP),
            Err(TessError::InvalidSegmentCount { segments: 0 })
        );
    }

    #[test]
    fn empty_span_degenerates_to_two_vertices() {
        let m = Mesh::fan_arc(8, 1.0, Vec2::zero(), Sweep::new(0.5, 0.5)).unwrap();
        assert_eq!(m.vertex_count(), 2);
        assert_eq!(m.triangle_count(), 0);
    }

    #[test]
    fn reversed_span_degenerates_too() {
        let m = Mesh::fan_arc(8, 1.0, Vec2::zero(), Sweep::new(1.5, 0.5)).unwrap();
        assert_eq!(m.vertex_count(), 2);
    }
}
