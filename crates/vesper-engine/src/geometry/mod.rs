//! CPU-side shape geometry.
//!
//! Shapes keep their transform as separate components (position, rotation,
//! scale) so relative attribute updates compose predictably. Triangles are
//! produced here in scene space and coloured by the renderer.

mod tessellate;
mod transform;

pub use tessellate::{fill_triangles, outline_triangles, regular_polygon};
pub use transform::Transform;
