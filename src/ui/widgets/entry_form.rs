//! Add-entry form with a dynamic exercise list.

use egui::{RichText, Ui};
use thiserror::Error;
use uuid::Uuid;

use crate::entries::{EntryError, Exercise, NewEntry, SessionType};

/// Reasons the form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// Text in a numeric box is not a number
    #[error("{field} must be a number, got \"{text}\"")]
    NotANumber {
        /// Field label
        field: &'static str,
        /// Text as typed
        text: String,
    },

    /// Entry failed validation
    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// One editable exercise row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    /// Client-side identifier
    pub id: String,
    /// Goal
    pub goal: String,
    /// Type
    pub exercise_type: String,
    /// Focus
    pub focus: String,
    /// Description
    pub description: String,
    /// Duration in minutes as typed
    pub duration: String,
    /// Fitness indicator
    pub fitness_indicator: String,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            goal: String::new(),
            exercise_type: String::new(),
            focus: String::new(),
            description: String::new(),
            duration: String::new(),
            fitness_indicator: String::new(),
        }
    }
}

impl ExerciseDraft {
    fn build(&self) -> Result<Exercise, FormError> {
        Ok(Exercise {
            id: Some(self.id.clone()),
            goal: self.goal.trim().to_string(),
            exercise_type: self.exercise_type.trim().to_string(),
            focus: self.focus.trim().to_string(),
            description: self.description.trim().to_string(),
            duration: parse_optional_number("Duration", &self.duration)?,
            fitness_indicator: self.fitness_indicator.trim().to_string(),
        })
    }
}

/// State of the add-entry form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryForm {
    /// Date as typed
    pub date: String,
    /// Microcycle as typed
    pub microcycle: String,
    /// Selected session type
    pub session_type: SessionType,
    /// Volume as typed
    pub volume: String,
    /// Intensity as typed
    pub intensity: String,
    /// Complexity as typed
    pub complexity: String,
    /// Primary objective
    pub objective1: String,
    /// Secondary objective
    pub objective2: String,
    /// Exercise rows in order
    pub exercises: Vec<ExerciseDraft>,
    /// Last validation error shown under the form
    pub error: Option<String>,
}

impl EntryForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty exercise row.
    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseDraft::default());
    }

    /// Remove the exercise row with `id`.
    pub fn remove_exercise(&mut self, id: &str) {
        self.exercises.retain(|e| e.id != id);
    }

    /// Clear every field after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build a validated entry from the form fields.
    pub fn build(&self) -> Result<NewEntry, FormError> {
        let microcycle = match self.microcycle.trim() {
            "" => return Err(EntryError::MissingField("microcycle").into()),
            text => text.parse::<u32>().map_err(|_| FormError::NotANumber {
                field: "Microcycle",
                text: text.to_string(),
            })?,
        };

        let objective2 = self.objective2.trim();
        let entry = NewEntry {
            date: self.date.trim().to_string(),
            microcycle,
            session_type: self.session_type.clone(),
            volume: parse_optional_number("Volume", &self.volume)?,
            intensity: parse_optional_number("Intensity", &self.intensity)?,
            complexity: parse_optional_number("Complexity", &self.complexity)?,
            objective1: self.objective1.trim().to_string(),
            objective2: (!objective2.is_empty()).then(|| objective2.to_string()),
            exercises: self
                .exercises
                .iter()
                .map(ExerciseDraft::build)
                .collect::<Result<_, _>>()?,
        };

        entry.validate()?;
        Ok(entry)
    }

    /// Render the form. Returns the entry when a valid form is submitted.
    ///
    /// `busy` disables the submit button while a save is outstanding.
    pub fn show(&mut self, ui: &mut Ui, busy: bool) -> Option<NewEntry> {
        let mut submitted = None;

        egui::Grid::new("entry_form_fields")
            .num_columns(4)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Date:");
                ui.add(egui::TextEdit::singleline(&mut self.date).hint_text("YYYY-MM-DD"));
                ui.label("Microcycle:");
                ui.text_edit_singleline(&mut self.microcycle);
                ui.end_row();

                ui.label("Session type:");
                egui::ComboBox::from_id_salt("form_session_type")
                    .selected_text(self.session_type.label().to_string())
                    .show_ui(ui, |ui| {
                        for session_type in SessionType::ALL.iter() {
                            ui.selectable_value(
                                &mut self.session_type,
                                session_type.clone(),
                                session_type.label(),
                            );
                        }
                    });
                ui.label("Volume (min):");
                ui.text_edit_singleline(&mut self.volume);
                ui.end_row();

                ui.label("Intensity (%):");
                ui.text_edit_singleline(&mut self.intensity);
                ui.label("Complexity:");
                ui.text_edit_singleline(&mut self.complexity);
                ui.end_row();

                ui.label("Objective 1:");
                ui.text_edit_singleline(&mut self.objective1);
                ui.label("Objective 2:");
                ui.text_edit_singleline(&mut self.objective2);
                ui.end_row();
            });

        ui.add_space(6.0);
        ui.label(RichText::new("Exercises").strong());

        let mut remove = None;
        for (index, exercise) in self.exercises.iter_mut().enumerate() {
            ui.push_id(&exercise.id, |ui| {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("#{}", index + 1)).weak());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Remove").clicked() {
                                remove = Some(exercise.id.clone());
                            }
                        });
                    });
                    egui::Grid::new("exercise_fields")
                        .num_columns(4)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Goal:");
                            ui.text_edit_singleline(&mut exercise.goal);
                            ui.label("Type:");
                            ui.text_edit_singleline(&mut exercise.exercise_type);
                            ui.end_row();

                            ui.label("Focus:");
                            ui.text_edit_singleline(&mut exercise.focus);
                            ui.label("Description:");
                            ui.text_edit_singleline(&mut exercise.description);
                            ui.end_row();

                            ui.label("Duration (min):");
                            ui.text_edit_singleline(&mut exercise.duration);
                            ui.label("Fitness indicator:");
                            ui.text_edit_singleline(&mut exercise.fitness_indicator);
                            ui.end_row();
                        });
                });
            });
        }
        if let Some(id) = remove {
            self.remove_exercise(&id);
        }

        ui.horizontal(|ui| {
            if ui.button("Add exercise").clicked() {
                self.add_exercise();
            }

            let label = if busy { "Saving..." } else { "Add entry" };
            if ui.add_enabled(!busy, egui::Button::new(label)).clicked() {
                match self.build() {
                    Ok(entry) => {
                        self.error = None;
                        submitted = Some(entry);
                    }
                    Err(e) => {
                        tracing::warn!("Entry form rejected: {}", e);
                        self.error = Some(e.to_string());
                    }
                }
            }
        });

        if let Some(error) = &self.error {
            ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
        }

        submitted
    }
}

fn parse_optional_number(field: &'static str, text: &str) -> Result<Option<f64>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| FormError::NotANumber {
            field,
            text: text.to_string(),
        })
}
