//! Native windows: the root of every frame.
//!
//! A [`Window`] owns a native window and its GPU surface. Once per frame the
//! driver calls [`Window::render`] with the root of its scene tree; the window
//! drains pending platform events, recomputes its aspect-correct view, clears
//! to the background, records and renders the tree, then presents.
//!
//! All windows share one event loop owned by the thread that created the
//! first window (the render thread). Windows can be looked up by name through
//! [`Window::memo`].

mod config;
mod platform;
mod window;

pub use config::WindowConfig;
pub use window::{Window, WindowHandle};
