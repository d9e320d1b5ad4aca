use std::cell::RefCell;
use std::rc::Rc;

use crate::signal::Signal;

use super::DrawList;

/// Anything that accepts attribute commands and can record itself for a frame.
///
/// Both methods must tolerate any input: an unrecognized key or arity is a
/// silent no-op, never a panic.
pub trait Drawable {
    /// Applies the attribute `key` carrying `signal`.
    fn attribute(&mut self, key: &str, signal: Signal);

    /// Records draw commands onto `target` in paint order.
    fn draw(&self, target: &mut DrawList);
}

/// Shared handle to a scene node.
///
/// Groups hold clones of these handles; the driver keeps its own clones to
/// address individual nodes. A node stays alive while any handle exists.
pub type Node = Rc<RefCell<dyn Drawable>>;

/// Wraps a drawable into a shareable [`Node`].
pub fn node<D: Drawable + 'static>(drawable: D) -> Node {
    Rc::new(RefCell::new(drawable))
}
