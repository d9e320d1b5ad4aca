/// Straight-alpha RGBA color in device channel range (`0`–`255`).
///
/// Attribute payloads carry colors as unit floats; they are scaled to this
/// range when applied to a shape and only converted back to floats when the
/// renderer builds vertices.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const MAX: u8 = u8::MAX;

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgba(255, 255, 255, 255)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Creates a color from unit-range components.
    ///
    /// Each component is clamped to `[0, 1]` and scaled by 255 with truncation.
    /// Non-finite components map to 0.
    #[inline]
    pub fn from_unit(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
            a: unit_to_channel(a),
        }
    }

    /// Straight-alpha unit components.
    #[inline]
    pub fn to_unit(self) -> [f32; 4] {
        let max = Self::MAX as f32;
        [self.r as f32 / max, self.g as f32 / max, self.b as f32 / max, self.a as f32 / max]
    }

    /// Premultiplied unit components, matching the renderer's blend state.
    #[inline]
    pub fn to_premul(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_unit();
        [r * a, g * a, b * a, a]
    }

    /// Clear color for a render pass (straight alpha, unit range).
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_unit();
        wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 }
    }
}

#[inline]
fn unit_to_channel(v: f32) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * Color::MAX as f32) as u8
}
