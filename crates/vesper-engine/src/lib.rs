//! Vesper engine crate.
//!
//! A small attribute-driven 2D scene graph for live visuals:
//! - [`scene`]: drawables ([`Polygon`](scene::Polygon), [`Group`](scene::Group)) mutated
//!   through string-keyed attributes carrying short numeric [`Signal`](signal::Signal)s
//! - [`window`]: the native window that renders one tree per frame
//! - [`memo`]: name-keyed singleton stores, used to address windows by name
//!
//! ```rust,ignore
//! use vesper_engine::scene::{node, Drawable, Group, Polygon};
//! use vesper_engine::signal::Signal;
//! use vesper_engine::window::Window;
//!
//! let window = Window::memo("main")?;
//! let square = node(Polygon::new(4));
//! let mut root = Group::new();
//! root.add(square.clone());
//!
//! while window.borrow().is_open() {
//!     square.borrow_mut().attribute("rotate", Signal::scalar(0.01));
//!     window.borrow_mut().render(&root);
//! }
//! ```

pub mod coords;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod memo;
pub mod paint;
pub mod render;
pub mod scene;
pub mod signal;
pub mod time;
pub mod window;
