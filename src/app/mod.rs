//! Application helpers shared by the binary and the HTTP shell.
//!
//! This module provides caller input validation, shutdown signal handling,
//! and end-of-run statistics logging.

pub mod shutdown;
pub mod statistics;
pub mod input;

// Re-export public API
pub use shutdown::{join_signal_listener, shutdown_on_signal};
pub use statistics::log_final_statistics;
pub use input::parse_source_url;
