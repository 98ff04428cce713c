//! Affine transforms in GL uniform layout.
//!
//! One type, [`Mat4`]. Scenes compose one per drawn item and the host
//! binds it unchanged as the vertex-stage matrix uniform.

mod mat4;

pub use mat4::Mat4;
