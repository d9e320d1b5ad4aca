use crate::scene::shapes::polygon::PolygonCmd;

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
}
