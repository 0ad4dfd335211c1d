//! Lifecycle management.
//!
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown (signals.rs):
//!     SIGINT/SIGTERM → stop accepting → drain in-flight requests → exit
//! ```

pub mod signals;

pub use signals::shutdown_signal;
