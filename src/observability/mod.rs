//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! relay handler / server produce:
//!     → logging.rs (structured log events, EnvFilter)
//!     → tracing.rs (per-request span with request ID)
//!     → metrics.rs (request counters and latency histogram)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metrics are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
pub mod tracing;
