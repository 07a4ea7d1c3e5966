//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured, leveled console events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Every cycle runs in a span carrying a UUID v4 cycle id
//! - Metrics are cheap and disabled unless a recorder is installed

pub mod logging;
pub mod metrics;
