//! Settings screen: backend, export and display preferences.

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use crate::config::{AppConfig, Theme};
use crate::export::ExportFormat;

/// Actions that can result from the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// No action
    None,
    /// Save changes and go back
    Save(AppConfig),
    /// Cancel changes and go back
    Cancel,
}

/// Settings screen state.
pub struct SettingsScreen {
    /// Configuration being edited
    pub config: AppConfig,
    /// Has unsaved changes
    pub has_changes: bool,
    /// Validation error message
    pub error_message: Option<String>,
    /// Text buffers for fields edited as text
    timeout_input: String,
    directory_input: String,
}

impl SettingsScreen {
    /// Create a settings screen editing a copy of `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            timeout_input: config.backend.request_timeout_secs.to_string(),
            directory_input: config.export.directory.display().to_string(),
            config: config.clone(),
            has_changes: false,
            error_message: None,
        }
    }

    /// Check the text buffers and copy them into the configuration.
    pub fn validate(&mut self) -> bool {
        if self.config.backend.base_url.trim().is_empty() {
            self.error_message = Some("Backend URL is required".to_string());
            return false;
        }

        match self.timeout_input.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => self.config.backend.request_timeout_secs = secs,
            _ => {
                self.error_message =
                    Some("Request timeout must be a whole number of seconds".to_string());
                return false;
            }
        }

        self.config.backend.base_url = self.config.backend.base_url.trim().to_string();
        self.config.export.directory = self.directory_input.trim().into();
        self.error_message = None;
        true
    }

    /// Render the settings screen.
    pub fn show(&mut self, ui: &mut Ui) -> SettingsAction {
        let mut action = SettingsAction::None;

        ui.horizontal(|ui| {
            ui.heading("Settings");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(
                        self.has_changes,
                        egui::Button::new("Save").fill(Color32::from_rgb(52, 168, 83)),
                    )
                    .clicked()
                    && self.validate()
                {
                    action = SettingsAction::Save(self.config.clone());
                }

                if ui.button("Cancel").clicked() {
                    action = SettingsAction::Cancel;
                }
            });
        });

        ui.separator();

        if let Some(ref error) = self.error_message {
            ui.label(RichText::new(format!("⚠ {}", error)).color(Color32::from_rgb(234, 67, 53)));
            ui.add_space(8.0);
        }

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            self.render_backend_section(ui);
            ui.add_space(16.0);
            self.render_export_section(ui);
            ui.add_space(16.0);
            self.render_display_section(ui);
        });

        action
    }

    fn render_backend_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Backend").size(18.0).strong());
            ui.add_space(8.0);

            egui::Grid::new("backend_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Service URL:");
                    if ui
                        .text_edit_singleline(&mut self.config.backend.base_url)
                        .changed()
                    {
                        self.has_changes = true;
                    }
                    ui.end_row();

                    ui.label("Timeout (s):");
                    if ui.text_edit_singleline(&mut self.timeout_input).changed() {
                        self.has_changes = true;
                    }
                    ui.end_row();
                });
        });
    }

    fn render_export_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Export").size(18.0).strong());
            ui.add_space(8.0);

            egui::Grid::new("export_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Format:");
                    ui.horizontal(|ui| {
                        for format in [ExportFormat::Docx, ExportFormat::Text] {
                            if ui
                                .selectable_label(
                                    self.config.export.format == format,
                                    format.to_string(),
                                )
                                .clicked()
                            {
                                self.config.export.format = format;
                                self.has_changes = true;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Save location:");
                    if ui
                        .checkbox(
                            &mut self.config.export.ask_for_location,
                            "Ask where to save each file",
                        )
                        .changed()
                    {
                        self.has_changes = true;
                    }
                    ui.end_row();

                    ui.label("Folder:");
                    ui.horizontal(|ui| {
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut self.directory_input)
                                    .hint_text("Downloads"),
                            )
                            .changed()
                        {
                            self.has_changes = true;
                        }
                        if ui.button("Browse...").clicked() {
                            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                                self.directory_input = dir.display().to_string();
                                self.has_changes = true;
                            }
                        }
                    });
                    ui.end_row();
                });
        });
    }

    fn render_display_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Display").size(18.0).strong());
            ui.add_space(8.0);

            egui::Grid::new("display_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Theme:");
                    ui.horizontal(|ui| {
                        for theme in [Theme::Dark, Theme::Light, Theme::System] {
                            if ui
                                .selectable_label(self.config.ui.theme == theme, theme.to_string())
                                .clicked()
                            {
                                self.config.ui.theme = theme;
                                self.has_changes = true;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Text size:");
                    if ui
                        .add(egui::Slider::new(&mut self.config.ui.font_scale, 0.75..=2.0))
                        .changed()
                    {
                        self.has_changes = true;
                    }
                    ui.end_row();
                });
        });
    }
}
