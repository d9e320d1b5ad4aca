//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; hosts that bring their own logger can skip [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
