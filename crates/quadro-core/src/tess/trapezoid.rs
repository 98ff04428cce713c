use crate::coords::Vec2;
use crate::tess::{Mesh, Topology};

impl Mesh {
    /// Isosceles trapezoid standing on `center`, rotated about it.
    ///
    /// Before rotation the bottom edge runs centered on `center` with
    /// `bottom_width`, and the top edge sits `height` above with
    /// `top_width`. Rotation is CCW about `center` itself, not the
    /// centroid; petals built this way pivot around their base. Vertex
    /// order matches [`Mesh::rect`]: BL, BR, TL, TL, BR, TR.
    ///
    /// Widths and height may be zero or negative; the quad degenerates
    /// or mirrors accordingly.
    pub fn trapezoid(
        center: Vec2,
        top_width: f32,
        bottom_width: f32,
        height: f32,
        rotation: f32,
    ) -> Mesh {
        let spin = |corner: Vec2| center + (corner - center).rotated(rotation);

        let bl = spin(Vec2::new(center.x - bottom_width / 2.0, center.y));
        let br = spin(Vec2::new(center.x + bottom_width / 2.0, center.y));
        let tl = spin(Vec2::new(center.x - top_width / 2.0, center.y + height));
        let tr = spin(Vec2::new(center.x + top_width / 2.0, center.y + height));

        Mesh {
            vertices: vec![bl.into(), br.into(), tl.into(), tl.into(), br.into(), tr.into()],
            topology: Topology::TriangleList,
        }
    }
}
