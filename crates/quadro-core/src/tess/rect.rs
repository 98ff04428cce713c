use crate::coords::Rect;
use crate::tess::{Mesh, Topology, Vertex2};

impl Mesh {
    /// Two triangles covering `rect`.
    ///
    /// Vertex order: bottom-left, bottom-right, top-left, top-left,
    /// bottom-right, top-right. The triangles share the BR to TL
    /// diagonal. A negative width or height mirrors the quad across its
    /// origin corner and flips winding, which is fine for unculled fills.
    pub fn rect(rect: Rect) -> Mesh {
        let lo = rect.min();
        let hi = rect.max();
        Mesh {
            vertices: vec![
                Vertex2::new(lo.x, lo.y),
                Vertex2::new(hi.x, lo.y),
                Vertex2::new(lo.x, hi.y),
                Vertex2::new(lo.x, hi.y),
                Vertex2::new(hi.x, lo.y),
                Vertex2::new(hi.x, hi.y),
            ],
            topology: Topology::TriangleList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_ordering_shares_the_diagonal() {
        let m = Mesh::rect(Rect::new(0.0, 0.0, 2.0, 3.0));
        assert_eq!(m.topology, Topology::TriangleList);
        assert_eq!(
            m.positions(),
            &[0.0, 0.0, 2.0, 0.0, 0.0, 3.0, 0.0, 3.0, 2.0, 0.0, 2.0, 3.0]
        );
    }

    #[test]
    fn offset_quad_vertex_sequence() {
        let m = Mesh::rect(Rect::new(-0.5, -0.75, 1.0, 0.5));
        assert_eq!(
            m.positions(),
            &[-0.5, -0.75, 0.5, -0.75, -0.5, -0.25, -0.5, -0.25, 0.5, -0.75, 0.5, -0.25]
        );
    }

    #[test]
    fn negative_width_mirrors_across_origin() {
        let m = Mesh::rect(Rect::new(0.0, 0.0, -2.0, 3.0));
        assert_eq!(
            m.positions(),
            &[0.0, 0.0, -2.0, 0.0, 0.0, 3.0, 0.0, 3.0, -2.0, 0.0, -2.0, 3.0]
        );
    }
}
