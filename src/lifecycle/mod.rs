//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build client → Build automation
//!
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → graceful stop, exit 0
//!
//! Shutdown (shutdown.rs):
//!     Stop automation → log reason → exit status
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then client, then the loop
//! - Signals do not wait for in-flight requests; the process exits

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{shutdown, ShutdownReason};
pub use signals::{wait_for_signal, Signal};
