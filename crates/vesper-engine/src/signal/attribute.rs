use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::paint::Color;

use super::Signal;

/// Recognized attribute commands.
///
/// Absolute commands overwrite a field; relative ones compose with the
/// current value.
///
/// | arity | key         | command     | mode     |
/// |-------|-------------|-------------|----------|
/// | 1     | `line`      | `Line`      | absolute |
/// | 1     | `rotate`    | `Rotate`    | relative |
/// | 1     | `scale`     | `ScaleBy`   | relative |
/// | 2     | `translate` | `Translate` | absolute |
/// | 2     | `scale`     | `ScaleXY`   | relative |
/// | 4     | `fill`      | `Fill`      | absolute |
/// | 4     | `stroke`    | `Stroke`    | absolute |
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Attribute {
    /// Outline thickness.
    Line(f32),
    /// Rotation delta in degrees.
    Rotate(f32),
    /// Uniform scale factor.
    ScaleBy(f32),
    /// Absolute position.
    Translate(Vec2),
    /// Per-axis scale factors.
    ScaleXY(Vec2),
    Fill(Color),
    Stroke(Color),
}

impl Attribute {
    /// Decodes a `(key, signal)` pair. Unknown keys and unsupported arities
    /// return `None`.
    pub fn decode(key: &str, signal: &Signal) -> Option<Self> {
        let attr = match (key, signal.as_slice()) {
            ("line", &[t]) => Attribute::Line(t),
            ("rotate", &[radians]) => Attribute::Rotate(radians_to_degrees(radians)),
            ("scale", &[f]) => Attribute::ScaleBy(f),
            ("translate", &[x, y]) => Attribute::Translate(Vec2::new(x, y)),
            ("scale", &[x, y]) => Attribute::ScaleXY(Vec2::new(x, y)),
            ("fill", &[r, g, b, a]) => Attribute::Fill(Color::from_unit(r, g, b, a)),
            ("stroke", &[r, g, b, a]) => Attribute::Stroke(Color::from_unit(r, g, b, a)),
            _ => return None,
        };
        Some(attr)
    }
}

#[inline]
fn radians_to_degrees(radians: f32) -> f32 {
    180.0 * radians / PI
}
