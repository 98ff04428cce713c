//! Frame-stepped animation state.
//!
//! Small Copy values advanced by pure `stepped` calls, one per frame.
//! Scenes hold them; nothing here touches clocks or schedulers.

mod bounce;
mod spin;

pub use bounce::Bounce;
pub use spin::Spin;
