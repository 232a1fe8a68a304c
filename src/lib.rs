//! TrainLog - training session dashboard
//!
//! Loads logged training sessions from a backend entry service, filters them,
//! summarizes the visible set and exports single sessions or whole
//! microcycles as Word or plain-text documents.

pub mod api;
pub mod config;
pub mod entries;
pub mod export;
pub mod metrics;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use api::EntriesClient;
pub use config::AppConfig;
pub use entries::{EntryStore, FilterCriteria, TrainingEntry};
pub use export::{ExportFormat, ExportedDocument};
pub use state::DashboardState;
