//! Dashboard state container.
//!
//! All mutation goes through [`DashboardState::apply`]; the visible subset and
//! the metrics are rederived from the store after every change.

use thiserror::Error;

use crate::entries::{
    apply, available_microcycles, EntryId, EntryStore, FilterCriteria, FilterInput, NewEntry,
    TrainingEntry,
};
use crate::export::{
    export_entry, export_microcycle, ExportError, ExportFormat, ExportValidation,
    ExportedDocument,
};
use crate::metrics::{summarize, DashboardMetrics};

/// How severe a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational
    Info,
    /// Recoverable problem
    Warning,
    /// Operation failed
    Error,
}

/// Message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text to show
    pub message: String,
    /// Whether the view should block until the notice is dismissed
    pub blocking: bool,
}

impl Notice {
    /// Blocking validation notice.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            blocking: true,
        }
    }

    /// Non-blocking warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
            blocking: false,
        }
    }

    /// Non-blocking error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            blocking: false,
        }
    }

    /// Non-blocking information.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            blocking: false,
        }
    }
}

/// Status of the initial bulk load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load attempted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Entries loaded
    Loaded,
    /// Load failed; previous entries kept
    Failed(String),
}

/// Returned when a creation is started while another one is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("An entry is already being saved")]
pub struct CreateInFlight;

/// Events that drive the dashboard.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// Bulk load requested
    LoadStarted,
    /// Bulk load finished
    EntriesLoaded(Vec<TrainingEntry>),
    /// Bulk load failed
    LoadFailed(String),
    /// Filter bar changed
    FiltersChanged(FilterInput),
    /// New entry submitted to the backend
    CreateStarted,
    /// Backend accepted the new entry and assigned an id
    EntryCreated {
        /// Submitted entry
        entry: NewEntry,
        /// Id assigned by the backend
        id: EntryId,
    },
    /// Backend rejected the new entry or was unreachable
    CreateFailed(String),
    /// Row clicked
    ToggleExpanded(EntryId),
    /// Notice acknowledged
    DismissNotice,
}

/// Complete state of the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    store: EntryStore,
    criteria: FilterCriteria,
    filter_input: FilterInput,
    visible: Vec<EntryId>,
    metrics: DashboardMetrics,
    expanded: Option<EntryId>,
    pending_create: bool,
    load_status: LoadStatus,
    notice: Option<Notice>,
}

impl DashboardState {
    /// Create an empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::LoadStarted => {
                self.load_status = LoadStatus::Loading;
            }
            DashboardEvent::EntriesLoaded(entries) => {
                let count = entries.len();
                let dropped = self.store.replace_all(entries);
                self.load_status = LoadStatus::Loaded;
                tracing::info!("Loaded {} entries", count - dropped);
                if dropped > 0 {
                    self.notice = Some(Notice::warning(format!(
                        "{} entries with duplicate ids were ignored",
                        dropped
                    )));
                }
                self.refresh();
            }
            DashboardEvent::LoadFailed(message) => {
                tracing::error!("Error fetching entries: {}", message);
                self.notice = Some(Notice::error(format!(
                    "Could not load training sessions: {}",
                    message
                )));
                self.load_status = LoadStatus::Failed(message);
            }
            DashboardEvent::FiltersChanged(input) => match input.parse() {
                Ok(criteria) => {
                    self.criteria = criteria;
                    self.filter_input = input;
                    self.refresh();
                }
                Err(e) => {
                    tracing::warn!("Ignoring filter change: {}", e);
                    self.notice = Some(Notice::warning(e.to_string()));
                }
            },
            DashboardEvent::CreateStarted => {
                if let Err(e) = self.begin_create() {
                    tracing::warn!("{}", e);
                }
            }
            DashboardEvent::EntryCreated { entry, id } => {
                self.pending_create = false;
                let stored = entry.with_id(id);
                let stored_id = stored.id.clone();
                match self.store.insert(stored) {
                    Ok(()) => {
                        tracing::info!("Added entry {}", stored_id);
                        self.notice = Some(Notice::info("Training session saved"));
                        self.refresh();
                    }
                    Err(e) => {
                        tracing::warn!("Created entry not stored: {}", e);
                        self.notice = Some(Notice::error(e.to_string()));
                    }
                }
            }
            DashboardEvent::CreateFailed(message) => {
                self.pending_create = false;
                tracing::error!("Error adding entry: {}", message);
                self.notice = Some(Notice::error(format!(
                    "Could not save training session: {}",
                    message
                )));
            }
            DashboardEvent::ToggleExpanded(id) => {
                if !self.store.contains(&id) {
                    tracing::warn!("Ignoring toggle of unknown entry {}", id);
                    return;
                }
                if self.expanded.as_ref() == Some(&id) {
                    self.expanded = None;
                } else {
                    self.expanded = Some(id);
                }
            }
            DashboardEvent::DismissNotice => {
                self.notice = None;
            }
        }
    }

    /// Mark a creation as outstanding, refusing if one already is.
    pub fn begin_create(&mut self) -> Result<(), CreateInFlight> {
        if self.pending_create {
            return Err(CreateInFlight);
        }
        self.pending_create = true;
        Ok(())
    }

    /// Recompute the visible ids and metrics from the store.
    fn refresh(&mut self) {
        let visible = apply(self.store.entries(), &self.criteria);
        self.metrics = summarize(visible.iter().copied());
        self.visible = visible.into_iter().map(|e| e.id.clone()).collect();

        if let Some(id) = &self.expanded {
            if !self.visible.contains(id) {
                self.expanded = None;
            }
        }

        tracing::debug!(
            "Showing {} of {} entries",
            self.visible.len(),
            self.store.len()
        );
    }

    /// Entries currently shown, in store order.
    pub fn visible_entries(&self) -> Vec<&TrainingEntry> {
        self.visible
            .iter()
            .filter_map(|id| self.store.get(id))
            .collect()
    }

    /// Every stored entry.
    pub fn all_entries(&self) -> &[TrainingEntry] {
        self.store.entries()
    }

    /// Microcycle numbers available for selection.
    pub fn microcycles(&self) -> Vec<u32> {
        available_microcycles(self.store.entries())
    }

    /// Metrics of the visible entries.
    pub fn metrics(&self) -> DashboardMetrics {
        self.metrics
    }

    /// Active criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Last accepted raw filter input.
    pub fn filter_input(&self) -> &FilterInput {
        &self.filter_input
    }

    /// Expanded row, if any.
    pub fn expanded(&self) -> Option<&EntryId> {
        self.expanded.as_ref()
    }

    /// Whether a creation request is outstanding.
    pub fn is_creating(&self) -> bool {
        self.pending_create
    }

    /// Bulk load status.
    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Current notice.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Export one stored entry.
    pub fn export_entry(
        &mut self,
        id: &EntryId,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let result = match self.store.get(id) {
            Some(entry) => export_entry(entry, format),
            None => Err(ExportValidation::EntryNotFound.into()),
        };
        self.note_export_failure(result)
    }

    /// Export the microcycle selected in the filter bar, over the full store.
    pub fn export_selected_microcycle(
        &mut self,
        format: ExportFormat,
    ) -> Result<ExportedDocument, ExportError> {
        let result = export_microcycle(self.criteria.microcycle, self.store.entries(), format);
        self.note_export_failure(result)
    }

    fn note_export_failure(
        &mut self,
        result: Result<ExportedDocument, ExportError>,
    ) -> Result<ExportedDocument, ExportError> {
        if let Err(e) = &result {
            self.notice = Some(match e.validation() {
                Some(reason) => Notice::validation(reason.to_string()),
                None => Notice::error(format!("Export failed: {}", e)),
            });
        }
        result
    }

    /// Record a notice raised outside the reducer, e.g. by the file save step.
    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
