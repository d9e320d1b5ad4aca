//! Scene graph.
//!
//! Responsibilities:
//! - the [`Drawable`] capability (`attribute` + `draw`) and its shared handle [`Node`]
//! - leaf shapes ([`Polygon`]) and the [`Group`] composite
//! - the per-frame draw stream ([`DrawList`]) that drawables record into
//!
//! Extending the scene:
//! - add a command payload under `scene::shapes::*` and a variant to [`DrawCmd`]
//! - implement [`Drawable`] for the new node, recording that command in `draw`
//! - add a matching renderer under `render::*`

mod cmd;
mod drawable;
mod group;
mod list;
mod polygon;

pub mod shapes;

pub use cmd::DrawCmd;
pub use drawable::{node, Drawable, Node};
pub use group::Group;
pub use list::{DrawList, GroupId, MAX_GROUP_DEPTH};
pub use polygon::{Polygon, PolygonState};
