//! Frame timing.
//!
//! One [`FrameClock`] per window; [`Window::render`](crate::window::Window::render)
//! ticks it once per presented frame and exposes the resulting [`FrameTime`].

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
