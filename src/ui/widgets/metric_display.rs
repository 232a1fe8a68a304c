//! Metric display widget for the dashboard summary.

use egui::{Align, Layout, RichText, Ui, Vec2};

use crate::metrics::DashboardMetrics;

/// A widget for displaying a single dashboard metric.
pub struct MetricDisplay<'a> {
    /// The metric value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The metric name/label
    label: &'a str,
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
        }
    }

    /// Number of visible sessions.
    pub fn sessions(count: usize) -> Self {
        Self::new(count.to_string(), "", "Sessions")
    }

    /// Sum of visible session volumes.
    pub fn minutes(total: f64) -> Self {
        Self::new(format_total(total), "min", "Minutes")
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(Vec2::new(120.0, 72.0));

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.label).size(13.0).weak());

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&self.value).size(36.0).strong());
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(14.0).weak());
                    }
                });
            });
        });
    }
}

/// Render both dashboard metrics side by side.
pub fn show_dashboard_metrics(ui: &mut Ui, metrics: DashboardMetrics) {
    ui.horizontal(|ui| {
        ui.group(|ui| MetricDisplay::sessions(metrics.session_count).show(ui));
        ui.group(|ui| MetricDisplay::minutes(metrics.total_minutes).show(ui));
    });
}

/// Whole numbers without a fraction, otherwise one decimal.
pub fn format_total(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
