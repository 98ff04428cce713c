use crate::tess::Vertex2;

/// Primitive mode the host should issue for a vertex sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Independent triangles, three vertices each (`gl.TRIANGLES`).
    TriangleList,
    /// Triangles sharing the first vertex (`gl.TRIANGLE_FAN`).
    TriangleFan,
}

/// Tessellated geometry for one primitive.
///
/// Meshes are regenerated every frame and meant to go straight into a
/// vertex buffer; nothing caches them. Constructors live in the shape
/// files of this module ([`rect`](Mesh::rect), [`circle`](Mesh::circle),
/// [`fan_arc`](Mesh::fan_arc), [`trapezoid`](Mesh::trapezoid)).
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex2>,
    pub topology: Topology,
}

impl Mesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Triangles the topology makes of the vertex count.
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.vertices.len() / 3,
            Topology::TriangleFan => self.vertices.len().saturating_sub(2),
        }
    }

    /// Flat `x0 y0 x1 y1 ...` view for APIs that take bare floats.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes for buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_flatten_in_vertex_order() {
        let m = Mesh {
            vertices: vec![Vertex2::new(1.0, 2.0), Vertex2::new(3.0, 4.0)],
            topology: Topology::TriangleFan,
        };
        assert_eq!(m.positions(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.as_bytes().len(), 16);
    }

    #[test]
    fn triangle_count_per_topology() {
        let verts = vec![Vertex2::default(); 6];
        let list = Mesh { vertices: verts.clone(), topology: Topology::TriangleList };
        let fan = Mesh { vertices: verts, topology: Topology::TriangleFan };
        assert_eq!(list.triangle_count(), 2);
        assert_eq!(fan.triangle_count(), 4);
    }

    #[test]
    fn degenerate_fan_has_no_triangles() {
        let fan = Mesh {
            vertices: vec![Vertex2::default(); 2],
            topology: Topology::TriangleFan,
        };
        assert_eq!(fan.triangle_count(), 0);
    }
}
