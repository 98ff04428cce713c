//! Fill styling for recorded draws.
//!
//! Single-color fills only; the host binds the color as a uniform next
//! to the world matrix when it issues each draw.

mod color;

pub use color::Color;
