//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides applied by the binary
//!     → PulseConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the token list is never reloaded mid-run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AccountsConfig;
pub use schema::ApiConfig;
pub use schema::AutomationConfig;
pub use schema::ObservabilityConfig;
pub use schema::PulseConfig;
pub use schema::RetryConfig;
