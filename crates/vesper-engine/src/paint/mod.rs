//! Paint model shared between the scene and the renderer.
//!
//! Scope:
//! - device color representation (8-bit straight-alpha RGBA)
//! - conversion to premultiplied floats at vertex build time

pub mod color;

pub use color::Color;
