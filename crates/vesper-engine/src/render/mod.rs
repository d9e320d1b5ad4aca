//! GPU rendering subsystem.
//!
//! Renderers consume a recorded [`DrawList`](crate::scene::DrawList) and issue
//! wgpu commands. Each renderer owns its GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in scene units (+Y down), already transformed.
//! - The vertex shader maps scene units to NDC using the frame's view uniform.

mod ctx;
mod polygon;

pub use ctx::{RenderCtx, RenderTarget};
pub use polygon::PolygonRenderer;
