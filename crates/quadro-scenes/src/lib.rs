//! Two demo scenes for the quadro pipeline: a car drifting across the
//! canvas and a flower spinning in place.
//!
//! Each scene is a small Copy state struct with a pure
//! [`stepped`](CarScene::stepped) advancing one frame and a
//! [`record`](CarScene::record) writing that frame into a
//! [`DrawList`](quadro_core::scene::DrawList). Hosts own the loop:
//! step, clear, record, assemble, upload, draw.

use quadro_core::paint::Color;

pub mod car;
pub mod flower;

pub use car::CarScene;
pub use flower::FlowerScene;

/// Background both scenes are drawn over; hosts clear to this.
pub const CLEAR_COLOR: Color = Color::new(1.0, 1.0, 1.0);
