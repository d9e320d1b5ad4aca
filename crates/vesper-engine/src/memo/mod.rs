//! Name-keyed singleton stores.
//!
//! A [`Memo`] hands out one shared instance per name for as long as the store
//! lives. Entries are created lazily on first lookup and never removed, so a
//! name keeps resolving to the same instance (`Rc::ptr_eq`).
//!
//! The store is single-threaded (`Rc`/`RefCell`). Process-wide registries such
//! as the window registry keep one in a `thread_local!` on the render thread.

mod store;

pub use store::Memo;
