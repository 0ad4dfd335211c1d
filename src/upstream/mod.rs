//! Workflow-execution API client.
//!
//! # Data Flow
//! ```text
//! relay handler
//!     → client.rs (POST {base_url}/{workflow_id}, bearer auth)
//!     → types.rs (UpstreamReply::Success | UpstreamReply::Failure)
//!     → relay handler maps the reply to the caller's response
//! ```

pub mod client;
pub mod types;

pub use client::WorkflowClient;
pub use types::{status_text, UpstreamError, UpstreamFailure, UpstreamReply};
