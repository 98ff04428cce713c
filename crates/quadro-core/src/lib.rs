//! Transforms, shape tessellation, and draw-stream recording for small
//! 2D primitive scenes.
//!
//! The crate stops where a graphics API begins. It produces flat f32
//! vertex buffers, a primitive mode per buffer, and the uniform values
//! to bind for each draw (world matrix, fill color). Context setup,
//! shaders, and the draw calls themselves belong to the host.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | [`Vec2`](coords::Vec2), [`Rect`](coords::Rect) in clip-space units |
//! | [`transform`] | [`Mat4`](transform::Mat4) in GL uniform layout |
//! | [`paint`] | [`Color`](paint::Color), a bare vec3 fill |
//! | [`tess`] | [`Mesh`](tess::Mesh) generators: rect, circle, fan arc, trapezoid |
//! | [`scene`] | [`DrawList`](scene::DrawList) recording plus frame [`assemble`](scene::assemble) |
//! | [`anim`] | [`Bounce`](anim::Bounce) and [`Spin`](anim::Spin) frame steppers |
//! | [`logging`] | one-shot `env_logger` setup |
//!
//! # Quick start
//!
//! ```rust
//! use quadro_core::coords::Vec2;
//! use quadro_core::paint::Color;
//! use quadro_core::scene::{DrawList, assemble};
//! use quadro_core::transform::Mat4;
//!
//! let mut list = DrawList::new();
//! list.set_transform(Mat4::identity().translate(0.25, 0.0, 0.0));
//! list.push_circle(32, 0.5, Vec2::zero(), Color::new(0.9, 0.2, 0.2));
//!
//! let frame = assemble(&list)?;
//! assert_eq!(frame.len(), 1);
//! assert_eq!(frame[0].vertex_count(), 96);
//! # Ok::<(), quadro_core::tess::TessError>(())
//! ```

pub mod anim;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod tess;
pub mod transform;
