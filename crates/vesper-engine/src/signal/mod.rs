//! Attribute payloads.
//!
//! A [`Signal`] is a short immutable numeric vector (length 1, 2 or 4). Together
//! with a string key it forms an attribute command. [`Attribute::decode`] maps a
//! `(key, signal)` pair onto the closed set of commands that shapes understand;
//! anything else decodes to `None` and is ignored by the receiver.

mod attribute;
mod error;
mod value;

pub use attribute::Attribute;
pub use error::SignalError;
pub use value::Signal;
