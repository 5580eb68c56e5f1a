//! Elevator status tracker
//!
//! Keeps an append-only log of reported elevator statuses, guards risky
//! working/broken switches behind a confirmation, and aggregates time in
//! each status over report windows.

pub mod config;
pub mod elevator;
pub mod errors;
pub mod event_log;
pub mod guard;
pub mod presentation;
pub mod query;
pub mod record;
pub mod status;
pub mod tracker;
pub mod transport;
pub mod uptime;

pub use config::Config;
pub use elevator::ElevatorId;
pub use errors::{Result, TrackerError};
pub use presentation::{Incoming, SessionStore, StatusBot};
pub use status::{Reporter, Status, StatusEvent};
pub use tracker::{ReportOutcome, StatusTracker};
pub use uptime::{ReportPeriod, ReportWindow, UptimeTotals};
