//! HTTP shell handlers.

mod process;
mod status;

pub use process::process_redirect_handler;
pub use status::status_handler;
