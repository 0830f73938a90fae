//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so
//! hosts that already configure their own backend can skip this module
//! entirely.

mod init;

pub use init::{init_logging, LoggingConfig};
