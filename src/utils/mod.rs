//! Utility Functions and Diagnostics
//!
//! Startup diagnostics and user-friendly error formatting.
//!
//! The [`errors`] module turns technical failures into actionable
//! console messages; categories with context-aware help:
//! - Permission errors → serial group membership, busy ports
//! - Missing ports → cabling, drivers, explicit port argument
//! - Open/probe failures → wrong port, silent firmware, baud mismatch
//! - Config errors → TOML syntax, out-of-range values
//!
//! The [`diagnostics`] module logs the platform and the visible serial
//! ports once at startup.

pub mod diagnostics;
pub mod errors;

pub use diagnostics::log_startup_diagnostics;
pub use errors::format_user_error;
