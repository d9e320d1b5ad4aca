use std::rc::Rc;

use crate::coords::Vec2;
use crate::geometry::{regular_polygon, Transform};
use crate::paint::Color;
use crate::signal::{Attribute, Signal};

use super::{DrawList, Drawable};

/// Mutable style and transform of a [`Polygon`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonState {
    pub transform: Transform,
    /// Outline width in local units. Zero draws no outline.
    pub outline_thickness: f32,
    pub fill: Color,
    pub stroke: Color,
}

impl Default for PolygonState {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            outline_thickness: 0.0,
            fill: Color::white(),
            stroke: Color::white(),
        }
    }
}

/// Regular polygon of unit radius, pivoting on its centre.
///
/// High side counts approximate a circle. Counts below 3 are kept as given
/// and render as degenerate shapes.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Rc<[Vec2]>,
    state: PolygonState,
}

impl Polygon {
    pub fn new(sides: u32) -> Self {
        Self {
            points: regular_polygon(sides).into(),
            state: PolygonState::default(),
        }
    }

    /// Number of vertices chosen at construction.
    pub fn sides(&self) -> usize {
        self.points.len()
    }

    pub fn state(&self) -> &PolygonState {
        &self.state
    }

    /// Applies a decoded attribute.
    pub fn apply(&mut self, attr: Attribute) {
        let state = &mut self.state;
        match attr {
            Attribute::Line(thickness) => state.outline_thickness = thickness,
            Attribute::Rotate(degrees) => state.transform.rotate(degrees),
            Attribute::ScaleBy(f) => state.transform.scale_by(Vec2::splat(f)),
            Attribute::Translate(p) => state.transform.set_position(p),
            Attribute::ScaleXY(f) => state.transform.scale_by(f),
            Attribute::Fill(c) => state.fill = c,
            Attribute::Stroke(c) => state.stroke = c,
        }
    }
}

impl Drawable for Polygon {
    fn attribute(&mut self, key: &str, signal: Signal) {
        match Attribute::decode(key, &signal) {
            Some(attr) => self.apply(attr),
            None => log::trace!("polygon: ignoring {key:?} with {} component(s)", signal.len()),
        }
    }

    fn draw(&self, target: &mut DrawList) {
        target.push_polygon(Rc::clone(&self.points), self.state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCmd;

    fn attributed(key: &str, signal: Signal) -> PolygonState {
        let mut p = Polygon::new(5);
        p.attribute(key, signal);
        p.state().clone()
    }

    // ── attribute table ───────────────────────────────────────────────────

    #[test]
    fn line_sets_only_thickness() {
        let expected = PolygonState { outline_thickness: 0.05, ..PolygonState::default() };
        assert_eq!(attributed("line", Signal::scalar(0.05)), expected);
    }

    #[test]
    fn rotate_sets_only_rotation() {
        let s = attributed("rotate", Signal::scalar(std::f32::consts::FRAC_PI_2));
        assert!((s.transform.rotation - 90.0).abs() < 1e-4);

        let mut rest = s.clone();
        rest.transform.rotation = 0.0;
        assert_eq!(rest, PolygonState::default());
    }

    #[test]
    fn uniform_scale_sets_only_scale() {
        let mut expected = PolygonState::default();
        expected.transform.scale = Vec2::splat(0.5);
        assert_eq!(attributed("scale", Signal::scalar(0.5)), expected);
    }

    #[test]
    fn translate_sets_only_position() {
        let mut expected = PolygonState::default();
        expected.transform.position = Vec2::new(0.25, -0.75);
        assert_eq!(attributed("translate", Signal::pair(0.25, -0.75)), expected);
    }

    #[test]
    fn axis_scale_sets_only_scale() {
        let mut expected = PolygonState::default();
        expected.transform.scale = Vec2::new(2.0, 0.5);
        assert_eq!(attributed("scale", Signal::pair(2.0, 0.5)), expected);
    }

    #[test]
    fn fill_sets_only_fill() {
        let expected = PolygonState { fill: Color::rgba(0, 255, 0, 127), ..PolygonState::default() };
        assert_eq!(attributed("fill", Signal::quad(0.0, 1.0, 0.0, 0.5)), expected);
    }

    #[test]
    fn stroke_sets_only_stroke() {
        let expected = PolygonState { stroke: Color::rgba(0, 0, 255, 255), ..PolygonState::default() };
        assert_eq!(attributed("stroke", Signal::quad(0.0, 0.0, 1.0, 1.0)), expected);
    }

    // ── lenient input ─────────────────────────────────────────────────────

    #[test]
    fn unknown_key_changes_nothing() {
        assert_eq!(attributed("bogus", Signal::scalar(1.0)), PolygonState::default());
    }

    #[test]
    fn unsupported_arity_changes_nothing() {
        assert_eq!(attributed("translate", Signal::scalar(1.0)), PolygonState::default());
        assert_eq!(attributed("fill", Signal::pair(1.0, 0.0)), PolygonState::default());
        assert_eq!(attributed("line", Signal::quad(1.0, 1.0, 1.0, 1.0)), PolygonState::default());
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        let mut p = Polygon::new(3);
        p.attribute("rotate", Signal::scalar(f32::NAN));
        p.attribute("scale", Signal::scalar(f32::INFINITY));
        p.attribute("fill", Signal::quad(f32::NAN, 2.0, -1.0, 1.0));
        assert_eq!(p.state().fill, Color::rgba(0, 255, 0, 255));
    }

    // ── relative vs absolute ──────────────────────────────────────────────

    #[test]
    fn rotations_accumulate() {
        let mut p = Polygon::new(4);
        p.attribute("rotate", Signal::scalar(0.2));
        p.attribute("rotate", Signal::scalar(0.3));
        let expected = (0.5f32).to_degrees();
        assert!((p.state().transform.rotation - expected).abs() < 1e-3);
    }

    #[test]
    fn scales_multiply() {
        let mut p = Polygon::new(4);
        p.attribute("scale", Signal::scalar(2.0));
        p.attribute("scale", Signal::pair(3.0, 0.5));
        assert_eq!(p.state().transform.scale, Vec2::new(6.0, 1.0));
    }

    #[test]
    fn translate_overwrites() {
        let mut p = Polygon::new(4);
        p.attribute("translate", Signal::pair(1.0, 0.0));
        p.attribute("translate", Signal::pair(2.0, 3.0));
        assert_eq!(p.state().transform.position, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn fill_overwrites_previous_fill() {
        let mut p = Polygon::new(4);
        p.attribute("fill", Signal::quad(0.2, 0.4, 0.6, 0.1));
        p.attribute("fill", Signal::quad(1.0, 0.0, 0.0, 1.0));
        assert_eq!(p.state().fill, Color::rgba(255, 0, 0, 255));
    }

    // ── construction / draw ───────────────────────────────────────────────

    #[test]
    fn degenerate_side_counts_are_kept() {
        assert_eq!(Polygon::new(0).sides(), 0);
        assert_eq!(Polygon::new(2).sides(), 2);
    }

    #[test]
    fn draw_records_current_state() {
        let mut p = Polygon::new(6);
        p.attribute("line", Signal::scalar(0.1));

        let mut list = DrawList::new();
        p.draw(&mut list);

        assert_eq!(list.len(), 1);
        let DrawCmd::Polygon(cmd) = &list.items()[0];
        assert_eq!(cmd.points.len(), 6);
        assert_eq!(&cmd.state, p.state());
    }
}
