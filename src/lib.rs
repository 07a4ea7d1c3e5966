//! node-pulse: periodic node liveness pinger.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                      AUTOMATION LOOP                       │
//!   │                                                            │
//!   │  health check ──▶ accounts ──▶ node directory ──▶ ping     │
//!   │       │              │               │              │      │
//!   │       ▼              ▼               ▼              ▼      │
//!   │  ┌─────────┐   ┌──────────┐   ┌─────────────────────────┐  │
//!   │  │   api   │   │ accounts │   │          nodes          │  │
//!   │  │ client  │   │  tokens  │   │  directory + dispatcher │  │
//!   │  └────┬────┘   └──────────┘   └────────────┬────────────┘  │
//!   │       └──────────── resilience ────────────┘               │
//!   │                  (fixed-delay retries)                     │
//!   │                                                            │
//!   │  Cross-cutting: config, observability, lifecycle           │
//!   └────────────────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod accounts;
pub mod api;
pub mod automation;
pub mod nodes;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use automation::{Automation, AutomationHandle, AutomationState};
pub use config::PulseConfig;
