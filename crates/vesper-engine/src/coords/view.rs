use super::Vec2;

/// Visible region of scene space for one frame.
///
/// The view is always 2 units wide. Its height follows the surface aspect
/// ratio (`2 * h / w`), so content authored in [-1, 1] stays undistorted
/// across resizes and is never cropped horizontally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub center: Vec2,
    pub size: Vec2,
}

impl View {
    /// Width of the view in scene units, independent of the surface.
    pub const WIDTH: f32 = 2.0;

    #[inline]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Aspect-correct view centred on the origin for a surface of
    /// `width` x `height` pixels.
    ///
    /// Returns `None` for a zero-sized surface (e.g. a minimized window).
    pub fn for_surface(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let w = width as f32;
        let h = height as f32;
        Some(Self::new(Vec2::zero(), Vec2::new(Self::WIDTH, Self::WIDTH * h / w)))
    }

    /// Half of the view size, used by shaders to map scene space to NDC.
    #[inline]
    pub fn half_extent(self) -> Vec2 {
        self.size * 0.5
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Vec2::zero(), Vec2::splat(Self::WIDTH))
    }
}
