//! Dashboard screen: filters, metrics, add-entry form and the entries table.

use egui::{Align, Layout, RichText, ScrollArea, Ui};

use crate::entries::{EntryId, FilterInput, NewEntry};
use crate::state::{DashboardState, LoadStatus, Notice};
use crate::ui::theme;
use crate::ui::widgets::{
    show_dashboard_metrics, show_entries_table, EntryForm, FilterBar, FilterBarAction,
    TableAction,
};

/// Requests the dashboard hands back to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Filter input changed
    Filter(FilterInput),
    /// Form submitted with a valid entry
    Submit(NewEntry),
    /// Expand or collapse a row
    Toggle(EntryId),
    /// Export one session
    ExportEntry(EntryId),
    /// Export the selected microcycle
    ExportMicrocycle,
    /// Notice acknowledged
    DismissNotice,
    /// Reload entries from the backend
    Reload,
    /// Open the settings screen
    OpenSettings,
}

/// Dashboard screen state owned by the view.
#[derive(Debug, Default)]
pub struct DashboardScreen {
    /// Filter bar draft
    pub filter_bar: FilterBar,
    /// Add-entry form
    pub form: EntryForm,
    /// Whether the add-entry form is open
    pub show_form: bool,
}

impl DashboardScreen {
    /// Create a new dashboard screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the form once the backend accepted the entry.
    pub fn entry_saved(&mut self) {
        self.form.reset();
        self.show_form = false;
    }

    /// Bring the filter bar back in line with the filters the state accepted.
    pub fn filters_applied(&mut self, state: &DashboardState) {
        self.filter_bar.sync(state.filter_input());
    }

    /// Render the dashboard and collect the user's requests.
    pub fn show(&mut self, ui: &mut Ui, state: &DashboardState) -> Vec<DashboardAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("Training Sessions Dashboard");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Settings").clicked() {
                    actions.push(DashboardAction::OpenSettings);
                }
                let loading = matches!(state.load_status(), LoadStatus::Loading);
                if ui
                    .add_enabled(!loading, egui::Button::new("Reload"))
                    .clicked()
                {
                    actions.push(DashboardAction::Reload);
                }
                if loading {
                    ui.spinner();
                }
            });
        });

        ui.separator();

        match self.filter_bar.show(ui, &state.microcycles()) {
            Some(FilterBarAction::Changed(input)) => actions.push(DashboardAction::Filter(input)),
            Some(FilterBarAction::ExportMicrocycle) => {
                actions.push(DashboardAction::ExportMicrocycle)
            }
            None => {}
        }

        ui.add_space(8.0);
        show_dashboard_metrics(ui, state.metrics());
        ui.add_space(8.0);

        if render_status_line(ui, state) {
            actions.push(DashboardAction::DismissNotice);
        }

        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            let toggle_label = if self.show_form {
                "Hide form"
            } else {
                "Add training session"
            };
            if ui.button(toggle_label).clicked() {
                self.show_form = !self.show_form;
            }

            if self.show_form {
                ui.group(|ui| {
                    ui.set_min_width(ui.available_width() - 16.0);
                    if let Some(entry) = self.form.show(ui, state.is_creating()) {
                        actions.push(DashboardAction::Submit(entry));
                    }
                });
            }

            ui.add_space(8.0);

            let entries = state.visible_entries();
            match show_entries_table(ui, &entries, state.expanded()) {
                Some(TableAction::Toggle(id)) => actions.push(DashboardAction::Toggle(id)),
                Some(TableAction::Export(id)) => actions.push(DashboardAction::ExportEntry(id)),
                None => {}
            }
        });

        if let Some(notice) = state.notice().filter(|n| n.blocking) {
            if show_blocking_notice(ui.ctx(), notice) {
                actions.push(DashboardAction::DismissNotice);
            }
        }

        actions
    }
}

/// Non-blocking notices and the load status. Returns true when dismissed.
fn render_status_line(ui: &mut Ui, state: &DashboardState) -> bool {
    let dark = ui.visuals().dark_mode;
    let mut dismiss = false;

    ui.horizontal(|ui| {
        let shown = state.visible_entries().len();
        let total = state.all_entries().len();
        if state.criteria().is_empty() {
            ui.label(RichText::new(format!("{} sessions", total)).weak());
        } else {
            ui.label(RichText::new(format!("Showing {} of {} sessions", shown, total)).weak());
        }
        ui.separator();

        if let Some(notice) = state.notice().filter(|n| !n.blocking) {
            ui.label(RichText::new(&notice.message).color(theme::notice_color(notice.level, dark)));
            if ui.small_button("✕").clicked() {
                dismiss = true;
            }
        } else if let LoadStatus::Failed(message) = state.load_status() {
            let color = ui.visuals().warn_fg_color;
            ui.label(RichText::new(format!("Offline: {}", message)).color(color));
        }
    });

    dismiss
}

/// Modal dialog for a blocking notice. Returns true once acknowledged.
fn show_blocking_notice(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut acknowledged = false;

    let modal = egui::Modal::new(egui::Id::new("blocking_notice")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading("Notice");
        ui.add_space(4.0);
        ui.label(RichText::new(&notice.message).size(16.0));
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                acknowledged = true;
            }
        });
    });

    acknowledged || modal.should_close()
}
