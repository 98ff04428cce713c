//! Parametric shape tessellation.
//!
//! Responsibilities:
//! - turn shape parameters into flat 2D vertex buffers
//! - tag each buffer with the primitive mode it should be drawn with
//! - reject the one bad parameter class, a zero segment count
//!
//! Generators attach to [`Mesh`] in one file per shape. All output is
//! position-only f32; color and transform travel separately as uniforms
//! (see [`scene`](crate::scene)).

mod arc;
mod circle;
mod error;
mod mesh;
mod rect;
mod trapezoid;
mod vertex;

pub use arc::Sweep;
pub use error::TessError;
pub use mesh::{Mesh, Topology};
pub use vertex::Vertex2;
