//! UI screens for the application.

pub mod dashboard;
pub mod settings;

pub use dashboard::{DashboardAction, DashboardScreen};
pub use settings::{SettingsAction, SettingsScreen};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Dashboard
    #[default]
    Dashboard,
    /// Settings screen
    Settings,
}
