//! Training entries: data model, in-memory store and filter engine.

pub mod filter;
pub mod store;
pub mod types;

pub use filter::{
    apply, available_microcycles, parse_calendar_date, FilterCriteria, FilterError, FilterInput,
};
pub use store::{EntryStore, StoreError};
pub use types::{EntryError, EntryId, Exercise, NewEntry, SessionType, TrainingEntry};
