//! Error handling and processing statistics.
//!
//! This module provides:
//! - The error taxonomy (caller input, transport, render, resolution failure)
//! - Categorization of `reqwest` errors
//! - Processing statistics tracking (transport errors, resolution events)
//!
//! Strategy-level errors never cross the orchestrator as `Err`: they are folded
//! into outcome variants. Only `CallerInputError` and `ResolutionFailure` reach
//! callers, through `ResolveError`.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    CallerInputError, ErrorType, InfoType, InitializationError, NotifyError, RenderError,
    ResolutionFailure, ResolveError, TransportError,
};
