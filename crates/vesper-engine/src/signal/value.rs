use crate::paint::Color;

use super::SignalError;

/// Immutable numeric vector of length 1, 2 or 4.
///
/// Components are addressed positionally as `x`, `y`, `z`, `w`. Only the first
/// `len()` components exist; accessors past that return `None`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Signal {
    values: [f32; 4],
    len: u8,
}

impl Signal {
    #[inline]
    pub const fn scalar(x: f32) -> Self {
        Self { values: [x, 0.0, 0.0, 0.0], len: 1 }
    }

    #[inline]
    pub const fn pair(x: f32, y: f32) -> Self {
        Self { values: [x, y, 0.0, 0.0], len: 2 }
    }

    #[inline]
    pub const fn quad(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { values: [x, y, z, w], len: 4 }
    }

    /// Number of components (1, 2 or 4).
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values[..self.len()]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.as_slice().get(index).copied()
    }

    /// First component; every signal has one.
    #[inline]
    pub fn x(&self) -> f32 {
        self.values[0]
    }

    #[inline]
    pub fn y(&self) -> Option<f32> {
        self.get(1)
    }

    #[inline]
    pub fn z(&self) -> Option<f32> {
        self.get(2)
    }

    #[inline]
    pub fn w(&self) -> Option<f32> {
        self.get(3)
    }

    /// Reads a 4-component signal as unit-range `(r, g, b, a)`.
    pub fn color(&self) -> Option<Color> {
        match *self.as_slice() {
            [r, g, b, a] => Some(Color::from_unit(r, g, b, a)),
            _ => None,
        }
    }
}

impl From<f32> for Signal {
    fn from(x: f32) -> Self {
        Self::scalar(x)
    }
}

impl From<[f32; 2]> for Signal {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::pair(x, y)
    }
}

impl From<[f32; 4]> for Signal {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::quad(x, y, z, w)
    }
}

impl TryFrom<&[f32]> for Signal {
    type Error = SignalError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        match *values {
            [x] => Ok(Self::scalar(x)),
            [x, y] => Ok(Self::pair(x, y)),
            [x, y, z, w] => Ok(Self::quad(x, y, z, w)),
            _ => Err(SignalError { len: values.len() }),
        }
    }
}
