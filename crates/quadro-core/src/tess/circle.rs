use std::f32::consts::TAU;

use crate::coords::Vec2;
use crate::tess::{Mesh, TessError, Topology, Vertex2};

impl Mesh {
    /// Disc of `segments` pie slices, encoded as a plain triangle list.
    ///
    /// Slice `i` is (center, rim `i`, rim `i+1`) with rim points on the
    /// angular grid `i * tau / segments` starting at +X. Repeating the
    /// center per slice costs vertices but lets the whole disc go out as
    /// `gl.TRIANGLES` without an index buffer, same as the rectangles.
    ///
    /// A negative radius mirrors every rim point through the center; the
    /// covered area is the same disc.
    pub fn circle(segments: u32, radius: f32, center: Vec2) -> Result<Mesh, TessError> {
        if segments == 0 {
            return Err(TessError::InvalidSegmentCount { segments });
        }
        let rim = |i: u32| {
            let angle = i as f32 * TAU / segments as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };
        let mut vertices = Vec::with_capacity(3 * segments as usize);
        for i in 0..segments {
            vertices.push(Vertex2::from(center));
            vertices.push(Vertex2::from(rim(i)));
            vertices.push(Vertex2::from(rim(i + 1)));
        }
        Ok(Mesh { vertices, topology: Topology::TriangleList })
    }
}
