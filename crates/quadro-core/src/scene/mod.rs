//! Frame recording and assembly.
//!
//! Responsibilities:
//! - record renderer-agnostic draw commands in paint order
//! - capture the transform current at each push
//! - turn a recorded frame into upload-ready primitives
//!
//! The intended per-frame cycle: `clear`, record through the push
//! helpers, [`assemble`], hand the primitives to the host.

mod cmd;
mod frame;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use frame::{Primitive, assemble};
pub use list::{DrawItem, DrawList};
