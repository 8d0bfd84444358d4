//! Logging utilities.
//!
//! All engine code logs through the `log` facade; this module only wires up the
//! `env_logger` backend once per process.

mod init;

pub use init::{init_logging, LoggingConfig};
