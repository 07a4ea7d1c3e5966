//! Automation subsystem.
//!
//! # Data Flow
//! ```text
//! start(interval)
//!     → load accounts (once)
//!     → loop while Running:
//!         health check ── unhealthy ──→ pause 10s, re-check
//!             │ healthy
//!             ▼
//!         for each account: get_nodes → for each node: ping → log outcome
//!             │
//!             ▼
//!         pause(interval)
//! ```

pub mod report;
pub mod runner;
pub mod state;

pub use report::{AccountReport, AccountView, CycleReport, PingOutcome};
pub use runner::{AccountError, Automation, AutomationError};
pub use state::{AutomationHandle, AutomationState};
