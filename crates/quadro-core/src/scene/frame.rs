use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::tess::{Mesh, TessError};
use crate::transform::Mat4;

/// One upload-ready draw: geometry plus the uniforms to bind for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub mesh: Mesh,
    pub color: Color,
    pub transform: Mat4,
}

impl Primitive {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

/// Tessellates every recorded item, preserving paint order.
///
/// Each returned [`Primitive`] is a complete draw for a GL-style host:
/// upload `mesh.as_bytes()`, bind `transform` and `color` uniforms,
/// issue `mesh.topology` over `vertex_count()` vertices. Uploading
/// before the matching draw call is the host's contract; nothing here
/// enforces it.
///
/// Fails on the first invalid command, with the list untouched for
/// inspection.
pub fn assemble(list: &DrawList) -> Result<Vec<Primitive>, TessError> {
    let mut out = Vec::with_capacity(list.items().len());
    for item in list.items() {
        let mesh = match item.cmd {
            DrawCmd::Rect(c) => Mesh::rect(c.rect),
            DrawCmd::Circle(c) => Mesh::circle(c.segments, c.radius, c.center)?,
            DrawCmd::Arc(c) => {
                Mesh::fan_arc_rotated(c.segments, c.radius, c.center, c.sweep, c.rotation)?
            }
            DrawCmd::Trapezoid(c) => {
                Mesh::trapezoid(c.center, c.top_width, c.bottom_width, c.height, c.rotation)
            }
        };
        out.push(Primitive { mesh, color: item.cmd.color(), transform: item.transform });
    }
    Ok(out)
}
