//! Entries table with expandable detail rows.

use egui::{RichText, Ui};

use crate::entries::{EntryId, TrainingEntry};
use crate::export::{EXERCISE_COLUMNS, NOT_AVAILABLE};

/// What the user did in the table this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Row header clicked
    Toggle(EntryId),
    /// Export button of an expanded row clicked
    Export(EntryId),
}

/// Column headings of the summary row.
pub const ENTRY_COLUMNS: [&str; 6] = [
    "Date",
    "Microcycle",
    "Session Type",
    "Volume",
    "Intensity",
    "Goal",
];

/// Summary cells for one entry, in [`ENTRY_COLUMNS`] order.
pub fn summary_cells(entry: &TrainingEntry) -> [String; 6] {
    [
        entry.date.clone(),
        entry.microcycle.to_string(),
        entry.session_type.to_string(),
        optional(entry.volume),
        optional(entry.intensity),
        entry.objective1.clone(),
    ]
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Render the table. `expanded` is the row currently showing details.
pub fn show_entries_table(
    ui: &mut Ui,
    entries: &[&TrainingEntry],
    expanded: Option<&EntryId>,
) -> Option<TableAction> {
    let mut action = None;

    if entries.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(RichText::new("No training sessions found").size(18.0).weak());
            ui.add_space(8.0);
            ui.label(RichText::new("Adjust the filters or add a new session").weak());
        });
        return None;
    }

    egui::Grid::new("entries_header")
        .num_columns(ENTRY_COLUMNS.len())
        .min_col_width(90.0)
        .show(ui, |ui| {
            for column in ENTRY_COLUMNS {
                ui.label(RichText::new(column).strong());
            }
            ui.end_row();
        });
    ui.separator();

    for entry in entries {
        let is_expanded = expanded == Some(&entry.id);

        ui.push_id(entry.id.as_str(), |ui| {
            let row = ui.group(|ui| {
                ui.set_min_width(ui.available_width() - 16.0);
                egui::Grid::new("entry_row")
                    .num_columns(ENTRY_COLUMNS.len())
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        for cell in summary_cells(entry) {
                            ui.label(cell);
                        }
                        ui.end_row();
                    });

                if is_expanded {
                    ui.separator();
                    if let Some(next) = show_details(ui, entry) {
                        action = Some(next);
                    }
                }
            });

            if row.response.interact(egui::Sense::click()).clicked() && action.is_none() {
                action = Some(TableAction::Toggle(entry.id.clone()));
            }
        });

        ui.add_space(4.0);
    }

    action
}

fn show_details(ui: &mut Ui, entry: &TrainingEntry) -> Option<TableAction> {
    let mut action = None;

    ui.label(format!(
        "Complexity: {}",
        entry
            .complexity
            .map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
    ));
    ui.label(format!(
        "Objective 2: {}",
        entry.objective2().unwrap_or(NOT_AVAILABLE)
    ));

    ui.add_space(4.0);
    if entry.exercises.is_empty() {
        ui.label(RichText::new("No exercises recorded").weak());
    } else {
        egui::Grid::new("exercise_table")
            .num_columns(EXERCISE_COLUMNS.len())
            .striped(true)
            .show(ui, |ui| {
                for column in EXERCISE_COLUMNS {
                    ui.label(RichText::new(column).strong());
                }
                ui.end_row();

                for exercise in &entry.exercises {
                    ui.label(&exercise.goal);
                    ui.label(&exercise.exercise_type);
                    ui.label(&exercise.focus);
                    ui.label(&exercise.description);
                    ui.label(
                        exercise
                            .duration
                            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| format!("{} min", d)),
                    );
                    ui.label(&exercise.fitness_indicator);
                    ui.end_row();
                }
            });
    }

    ui.add_space(4.0);
    if ui.button("Export session").clicked() {
        action = Some(TableAction::Export(entry.id.clone()));
    }

    action
}
