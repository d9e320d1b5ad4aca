use crate::coords::Vec2;

/// Decomposed 2D transform pivoting on the shape origin.
///
/// Points are scaled, then rotated, then translated. Rotation is in degrees
/// and turns clockwise on screen (scene space has +Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Degrees, normalized into `[0, 360)`.
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec2::zero(),
        rotation: 0.0,
        scale: Vec2::splat(1.0),
    };

    /// Adds `degrees` to the current rotation.
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(self.rotation + degrees);
    }

    /// Multiplies the current scale per axis.
    pub fn scale_by(&mut self, factors: Vec2) {
        self.scale = self.scale.scaled(factors);
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Maps a point from shape-local space into scene space.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let s = p.scaled(self.scale);
        Vec2::new(s.x * cos - s.y * sin, s.x * sin + s.y * cos) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn normalize_degrees(deg: f32) -> f32 {
    if !deg.is_finite() {
        return deg;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}
