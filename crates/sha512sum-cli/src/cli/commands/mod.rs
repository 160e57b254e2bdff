//! CLI command handlers, one per mode.

mod check;
mod digest;

pub use check::run_check;
pub use digest::run_digest;
