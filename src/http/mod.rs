//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID + trace layers)
//!     → relay.rs (validate, look up credentials, call upstream)
//!     → request.rs (request ID, story extraction)
//!     → response.rs (error taxonomy → JSON body + status)
//!     → Send to client
//! ```

pub mod relay;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::{InternalError, RelayError};
pub use server::{AppState, RelayServer};
