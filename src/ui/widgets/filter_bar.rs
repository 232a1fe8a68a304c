//! Filter bar: session type, microcycle, objective and date range, plus the
//! microcycle export button.

use egui::{RichText, Ui};

use crate::entries::{FilterInput, SessionType};

/// What the user did in the filter bar this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterBarAction {
    /// Criteria should be re-applied with this input
    Changed(FilterInput),
    /// Export button pressed
    ExportMicrocycle,
}

/// Editable copy of the filter input.
#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    draft: FilterInput,
}

impl FilterBar {
    /// Clear every field.
    pub fn reset(&mut self) -> FilterInput {
        self.draft = FilterInput::default();
        self.draft.clone()
    }

    /// Show `applied` again, dropping any rejected text.
    pub fn sync(&mut self, applied: &FilterInput) {
        if &self.draft != applied {
            tracing::debug!("Filter bar reset to the applied filters");
            self.draft = applied.clone();
        }
    }

    /// Render the bar.
    ///
    /// Selectors and the objective box report every change; date boxes
    /// report when editing finishes so half-typed dates are not rejected.
    pub fn show(&mut self, ui: &mut Ui, microcycles: &[u32]) -> Option<FilterBarAction> {
        let mut changed = false;
        let mut cleared = false;
        let mut export = false;

        ui.horizontal_wrapped(|ui| {
            ui.label("Session type:");
            let selected = if self.draft.session_type.is_empty() {
                "All".to_string()
            } else {
                self.draft.session_type.clone()
            };
            egui::ComboBox::from_id_salt("filter_session_type")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(self.draft.session_type.is_empty(), "All")
                        .clicked()
                    {
                        self.draft.session_type.clear();
                        changed = true;
                    }
                    for session_type in SessionType::ALL.iter() {
                        let label = session_type.label();
                        if ui
                            .selectable_label(self.draft.session_type == label, label)
                            .clicked()
                        {
                            self.draft.session_type = label.to_string();
                            changed = true;
                        }
                    }
                });

            ui.separator();

            ui.label("Microcycle:");
            let selected = if self.draft.microcycle.is_empty() {
                "All".to_string()
            } else {
                self.draft.microcycle.clone()
            };
            egui::ComboBox::from_id_salt("filter_microcycle")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(self.draft.microcycle.is_empty(), "All")
                        .clicked()
                    {
                        self.draft.microcycle.clear();
                        changed = true;
                    }
                    for microcycle in microcycles {
                        let label = microcycle.to_string();
                        if ui
                            .selectable_label(self.draft.microcycle == label, &label)
                            .clicked()
                        {
                            self.draft.microcycle = label;
                            changed = true;
                        }
                    }
                });

            ui.separator();

            ui.label("Objective:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut self.draft.objective)
                        .hint_text("Search objectives")
                        .desired_width(140.0),
                )
                .changed()
            {
                changed = true;
            }

            ui.separator();

            ui.label("From:");
            if date_box(ui, &mut self.draft.start_date) {
                changed = true;
            }
            ui.label("To:");
            if date_box(ui, &mut self.draft.end_date) {
                changed = true;
            }

            if ui
                .add_enabled(
                    self.draft != FilterInput::default(),
                    egui::Button::new("Clear filters"),
                )
                .clicked()
            {
                cleared = true;
            }

            ui.separator();

            if ui
                .button(RichText::new("Export microcycle").strong())
                .on_hover_text("Export every session of the selected microcycle")
                .clicked()
            {
                export = true;
            }
        });

        if export {
            Some(FilterBarAction::ExportMicrocycle)
        } else if cleared {
            Some(FilterBarAction::Changed(self.reset()))
        } else if changed {
            Some(FilterBarAction::Changed(self.draft.clone()))
        } else {
            None
        }
    }
}

fn date_box(ui: &mut Ui, value: &mut String) -> bool {
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("YYYY-MM-DD")
            .desired_width(96.0),
    );
    response.lost_focus()
}
