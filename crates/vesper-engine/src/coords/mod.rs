//! Coordinate types shared by the scene and the renderer.
//!
//! Scene space:
//! - content is authored around the origin, roughly within [-1, 1]
//! - +X right, +Y down
//!
//! The window maps scene space onto the surface through a [`View`] that keeps
//! the horizontal extent fixed at 2 units and derives the vertical extent from
//! the surface aspect ratio.

mod vec2;
mod view;

pub use vec2::Vec2;
pub use view::View;
