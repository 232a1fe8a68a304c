//! Main application state and egui integration.
//!
//! Backend requests run on the tokio runtime and report back through a
//! crossbeam channel; the UI thread is the only place dashboard state changes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver, Sender};
use eframe::egui;
use tokio::runtime::Handle;

use trainlog::api::EntriesClient;
use trainlog::config::{save_config, AppConfig};
use trainlog::entries::NewEntry;
use trainlog::export::{ExportError, ExportFormat, ExportedDocument};
use trainlog::state::{DashboardEvent, DashboardState, Notice};
use trainlog::ui::screens::{
    DashboardAction, DashboardScreen, Screen, SettingsAction, SettingsScreen,
};
use trainlog::ui::theme;

/// Main application state.
pub struct TrainLogApp {
    /// Current screen
    current_screen: Screen,
    /// Application configuration
    config: AppConfig,
    /// Entries, filters and derived metrics
    state: DashboardState,
    /// Dashboard view state
    dashboard_screen: DashboardScreen,
    /// Settings screen state, present while open
    settings_screen: Option<SettingsScreen>,
    /// Backend client; absent if it could not be built
    client: Option<Arc<EntriesClient>>,
    /// Runtime the backend requests run on
    runtime: Handle,
    /// Results of backend requests
    event_tx: Sender<DashboardEvent>,
    event_rx: Receiver<DashboardEvent>,
}

impl TrainLogApp {
    /// Create the application and start loading entries.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, runtime: Handle) -> Self {
        theme::apply(&cc.egui_ctx, config.ui.theme, config.ui.font_scale);

        let (event_tx, event_rx) = unbounded();

        let mut app = Self {
            current_screen: Screen::Dashboard,
            client: None,
            config,
            state: DashboardState::new(),
            dashboard_screen: DashboardScreen::new(),
            settings_screen: None,
            runtime,
            event_tx,
            event_rx,
        };

        app.connect();
        app.load_entries(&cc.egui_ctx);
        app
    }

    /// Build the backend client from the current configuration.
    fn connect(&mut self) {
        let timeout = Duration::from_secs(self.config.backend.request_timeout_secs);
        match EntriesClient::new(&self.config.backend.base_url, timeout) {
            Ok(client) => {
                tracing::info!("Using entry service at {}", client.entries_url());
                self.client = Some(Arc::new(client));
            }
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {}", e);
                self.client = None;
                self.state.set_notice(Notice::error(e.to_string()));
            }
        }
    }

    /// Fetch every entry in the background.
    fn load_entries(&mut self, ctx: &egui::Context) {
        let Some(client) = self.client.clone() else {
            return;
        };

        self.state.apply(DashboardEvent::LoadStarted);

        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let event = match client.fetch_entries().await {
                Ok(entries) => DashboardEvent::EntriesLoaded(entries),
                Err(e) => DashboardEvent::LoadFailed(e.to_string()),
            };
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Submit a new entry in the background.
    fn create_entry(&mut self, ctx: &egui::Context, entry: NewEntry) {
        let Some(client) = self.client.clone() else {
            self.state
                .set_notice(Notice::error("No connection to the entry service"));
            return;
        };

        if let Err(e) = self.state.begin_create() {
            tracing::warn!("{}", e);
            self.state.set_notice(Notice::warning(e.to_string()));
            return;
        }

        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let event = match client.create_entry(&entry).await {
                Ok(id) => DashboardEvent::EntryCreated { entry, id },
                Err(e) => DashboardEvent::CreateFailed(e.to_string()),
            };
            let _ = tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Apply finished backend requests.
    fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if matches!(event, DashboardEvent::EntryCreated { .. }) {
                self.dashboard_screen.entry_saved();
            }
            self.state.apply(event);
        }
    }

    fn handle_dashboard_action(&mut self, ctx: &egui::Context, action: DashboardAction) {
        let format = self.config.export.format;
        match action {
            DashboardAction::Filter(input) => {
                self.state.apply(DashboardEvent::FiltersChanged(input));
                self.dashboard_screen.filters_applied(&self.state);
            }
            DashboardAction::Submit(entry) => self.create_entry(ctx, entry),
            DashboardAction::Toggle(id) => self.state.apply(DashboardEvent::ToggleExpanded(id)),
            DashboardAction::ExportEntry(id) => {
                if let Ok(doc) = self.state.export_entry(&id, format) {
                    self.deliver(&doc);
                }
            }
            DashboardAction::ExportMicrocycle => {
                if let Ok(doc) = self.state.export_selected_microcycle(format) {
                    self.deliver(&doc);
                }
            }
            DashboardAction::DismissNotice => self.state.apply(DashboardEvent::DismissNotice),
            DashboardAction::Reload => self.load_entries(ctx),
            DashboardAction::OpenSettings => {
                self.settings_screen = Some(SettingsScreen::new(&self.config));
                self.current_screen = Screen::Settings;
            }
        }
    }

    /// Save a generated document and report the outcome.
    fn deliver(&mut self, doc: &ExportedDocument) {
        match self.save_document(doc) {
            Ok(Some(path)) => {
                self.state
                    .set_notice(Notice::info(format!("Saved {}", path.display())));
            }
            Ok(None) => tracing::debug!("Save of {} cancelled", doc.filename),
            Err(e) => {
                tracing::error!("Failed to save {}: {}", doc.filename, e);
                self.state
                    .set_notice(Notice::error(format!("Export failed: {}", e)));
            }
        }
    }

    /// Write the document, asking for a location when configured to.
    ///
    /// Returns `None` when the user cancels the dialog.
    fn save_document(&self, doc: &ExportedDocument) -> Result<Option<PathBuf>, ExportError> {
        let directory = self.config.export.resolved_directory();

        if !self.config.export.ask_for_location {
            return doc.save_to(&directory).map(Some);
        }

        let (filter_name, extension) = match doc.format {
            ExportFormat::Docx => ("Word document", "docx"),
            ExportFormat::Text => ("Text file", "txt"),
        };
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&directory)
            .set_file_name(&doc.filename)
            .add_filter(filter_name, &[extension])
            .save_file()
        else {
            return Ok(None);
        };

        std::fs::write(&path, &doc.bytes)?;
        tracing::info!("Saved {} ({} bytes)", path.display(), doc.bytes.len());
        Ok(Some(path))
    }

    fn apply_settings(&mut self, ctx: &egui::Context, config: AppConfig) {
        let reconnect = config.backend != self.config.backend;
        self.config = AppConfig {
            data_dir: self.config.data_dir.clone(),
            ..config
        };

        if let Err(e) = save_config(&self.config) {
            tracing::error!("Failed to save configuration: {}", e);
            self.state
                .set_notice(Notice::error(format!("Settings not saved: {}", e)));
        }

        theme::apply(ctx, self.config.ui.theme, self.config.ui.font_scale);

        if reconnect {
            self.connect();
            self.load_entries(ctx);
        }
    }
}

impl eframe::App for TrainLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.current_screen == Screen::Settings
        {
            self.settings_screen = None;
            self.current_screen = Screen::Dashboard;
        }

        let mut actions = Vec::new();
        let mut settings_action = SettingsAction::None;

        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Dashboard => {
                actions = self.dashboard_screen.show(ui, &self.state);
            }
            Screen::Settings => {
                if let Some(screen) = &mut self.settings_screen {
                    settings_action = screen.show(ui);
                }
            }
        });

        for action in actions {
            self.handle_dashboard_action(ctx, action);
        }

        match settings_action {
            SettingsAction::None => {}
            SettingsAction::Save(config) => {
                self.apply_settings(ctx, config);
                self.settings_screen = None;
                self.current_screen = Screen::Dashboard;
            }
            SettingsAction::Cancel => {
                self.settings_screen = None;
                self.current_screen = Screen::Dashboard;
            }
        }
    }
}
