//! Story relay library.
//!
//! Accepts `{"story": ...}` on `POST /api/run`, forwards it to a
//! workflow-execution API and relays the reply.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::RelayServer;
