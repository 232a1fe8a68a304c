//! Metrics module for session totals.

pub mod summary;

pub use summary::{summarize, summarize_microcycle, DashboardMetrics, MicrocycleTotals};
