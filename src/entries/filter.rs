//! Filter engine for the entry table.
//!
//! Criteria combine with AND; an unset criterion imposes no constraint. The
//! result keeps the input order and never mutates the input.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::types::{SessionType, TrainingEntry};

/// Date layouts accepted for entry dates and filter bounds, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Errors raised when raw filter input cannot be turned into criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Microcycle value is not an unsigned integer
    #[error("Invalid microcycle filter: {0:?}")]
    InvalidMicrocycle(String),

    /// Date bound is not a calendar date
    #[error("Invalid date filter: {0:?}")]
    InvalidDate(String),
}

/// Raw values as produced by a filter bar. Empty means "all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterInput {
    /// Session type label, or empty for all types
    pub session_type: String,
    /// Microcycle number as typed or selected
    pub microcycle: String,
    /// Objective search text
    pub objective: String,
    /// Inclusive lower date bound
    pub start_date: String,
    /// Inclusive upper date bound
    pub end_date: String,
}

impl FilterInput {
    /// Convert raw input into typed criteria.
    pub fn parse(&self) -> Result<FilterCriteria, FilterError> {
        let session_type = non_empty(&self.session_type).map(SessionType::from);

        let microcycle = match non_empty(&self.microcycle) {
            Some(raw) => Some(
                raw.parse::<u32>()
                    .map_err(|_| FilterError::InvalidMicrocycle(raw.to_string()))?,
            ),
            None => None,
        };

        let objective = non_empty(&self.objective).map(|_| self.objective.clone());

        Ok(FilterCriteria {
            session_type,
            microcycle,
            objective,
            start_date: parse_bound(&self.start_date)?,
            end_date: parse_bound(&self.end_date)?,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_bound(raw: &str) -> Result<Option<NaiveDate>, FilterError> {
    match non_empty(raw) {
        Some(value) => parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| FilterError::InvalidDate(value.to_string())),
        None => Ok(None),
    }
}

/// Typed filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Exact session type match
    pub session_type: Option<SessionType>,
    /// Exact microcycle match
    pub microcycle: Option<u32>,
    /// Case-insensitive substring of either objective
    pub objective: Option<String>,
    /// Inclusive lower bound on the entry date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a single entry satisfies every active criterion.
    pub fn matches(&self, entry: &TrainingEntry) -> bool {
        if let Some(session_type) = &self.session_type {
            if &entry.session_type != session_type {
                return false;
            }
        }

        if let Some(microcycle) = self.microcycle {
            if entry.microcycle != microcycle {
                return false;
            }
        }

        if let Some(objective) = &self.objective {
            let needle = objective.to_lowercase();
            let in_primary = entry.objective1.to_lowercase().contains(&needle);
            let in_secondary = entry
                .objective2
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&needle);
            if !in_primary && !in_secondary {
                return false;
            }
        }

        if self.start_date.is_some() || self.end_date.is_some() {
            let Some(date) = entry.calendar_date() else {
                return false;
            };
            if self.start_date.is_some_and(|start| date < start) {
                return false;
            }
            if self.end_date.is_some_and(|end| date > end) {
                return false;
            }
        }

        true
    }
}

/// Keep the entries that match `criteria`, preserving input order.
pub fn apply<'a, I>(entries: I, criteria: &FilterCriteria) -> Vec<&'a TrainingEntry>
where
    I: IntoIterator<Item = &'a TrainingEntry>,
{
    entries
        .into_iter()
        .filter(|entry| criteria.matches(entry))
        .collect()
}

/// Distinct microcycle numbers present in `entries`, ascending.
pub fn available_microcycles<'a, I>(entries: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a TrainingEntry>,
{
    entries
        .into_iter()
        .map(|e| e.microcycle)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Read a date string as a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `DD.MM.YYYY`, RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM:SS`; timestamps keep only their date part.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
