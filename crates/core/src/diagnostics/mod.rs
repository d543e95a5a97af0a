//! Operational diagnostics
//!
//! Liveness, degraded-state health reporting, and content counters.

pub mod ports;
pub mod service;

pub use ports::StatsRepository;
pub use service::DiagnosticsService;
