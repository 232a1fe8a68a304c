//! UI widgets for reusable components.

pub mod entries_table;
pub mod entry_form;
pub mod filter_bar;
pub mod metric_display;

pub use entries_table::{show_entries_table, summary_cells, TableAction, ENTRY_COLUMNS};
pub use entry_form::{EntryForm, ExerciseDraft, FormError};
pub use filter_bar::{FilterBar, FilterBarAction};
pub use metric_display::{show_dashboard_metrics, MetricDisplay};
