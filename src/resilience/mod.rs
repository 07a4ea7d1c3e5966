//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to the remote API:
//!     → reqwest client timeout (fixed per-request deadline)
//!     → On any failure: retries.rs (fixed delay, bounded attempts)
//!     → Final error surfaced to the caller
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - Retries do not distinguish transport errors from 4xx/5xx
//! - No circuit breaker; the automation loop's health gate plays that role

pub mod retries;

pub use retries::RetryPolicy;
