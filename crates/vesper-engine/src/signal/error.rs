use std::fmt;

/// Rejected attempt to build a [`Signal`](super::Signal) from a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalError {
    /// Length of the rejected slice.
    pub len: usize,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signal length must be 1, 2 or 4 (got {})", self.len)
    }
}

impl std::error::Error for SignalError {}
