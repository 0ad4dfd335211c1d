//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc with the handler
//!
//! per request:
//!     secrets.rs reads workflow id + API key from the environment
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running with no file is valid
//! - Credentials never live in the config file, only their variable names

pub mod loader;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    LimitsConfig, ListenerConfig, ObservabilityConfig, RelayConfig, SecretsConfig,
    UpstreamConfig,
};
pub use secrets::{ProcessEnv, SecretSource, StaticSecrets};
pub use validation::{validate_config, ValidationError};
