//! UI module for the egui-based dashboard.

pub mod screens;
pub mod theme;
pub mod widgets;

pub use screens::{DashboardAction, DashboardScreen, Screen, SettingsAction, SettingsScreen};
