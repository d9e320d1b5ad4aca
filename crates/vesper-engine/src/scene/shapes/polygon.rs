use std::rc::Rc;

use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, PolygonState};

/// Polygon draw payload: local outline points plus the style and transform
/// captured at draw time.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Rc<[Vec2]>,
    pub state: PolygonState,
}

impl DrawList {
    /// Records a polygon draw command.
    #[inline]
    pub fn push_polygon(&mut self, points: Rc<[Vec2]>, state: PolygonState) {
        self.push(DrawCmd::Polygon(PolygonCmd { points, state }));
    }
}
