//! Training entry types and enums.
//!
//! Wire format follows the backend entry service: camelCase JSON, optional
//! load metrics, exercises always present as a (possibly empty) list.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::filter::parse_calendar_date;

/// Identifier assigned to an entry by the backend store.
///
/// The backend may hand out numeric or string ids; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number(deserializer).map(EntryId)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(
        match Option::<RawId>::deserialize(deserializer)? {
            Some(RawId::Text(s)) => Some(s),
            Some(RawId::Int(n)) => Some(n.to_string()),
            Some(RawId::Float(n)) => Some(n.to_string()),
            None => None,
        },
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

/// Microcycle numbers arrive as integers or numeric strings.
fn microcycle_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    use serde::de::Error as _;

    let value = match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => n,
        RawNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid microcycle {s:?}")))?,
    };

    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(D::Error::custom(format!("invalid microcycle {value}")));
    }
    Ok(value as u32)
}

/// Load metrics may be numbers, numeric strings, blank strings or null.
fn optional_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    use serde::de::Error as _;

    match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Ok(Some(n)),
        Some(RawNumber::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawNumber::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number {s:?}"))),
        None => Ok(None),
    }
}

/// Categorical tag of a session.
///
/// Serialized as its display string; tags outside the built-in vocabulary
/// are preserved as [`SessionType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionType {
    /// Regular training session
    #[default]
    Training,
    /// Competitive match
    Match,
    /// Recovery / regeneration session
    Recovery,
    /// Anything else
    Other,
    /// Tag not known to this build
    Custom(String),
}

impl SessionType {
    /// Built-in vocabulary in selector order.
    pub const ALL: [SessionType; 4] = [
        SessionType::Training,
        SessionType::Match,
        SessionType::Recovery,
        SessionType::Other,
    ];

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            SessionType::Training => "Training",
            SessionType::Match => "Match",
            SessionType::Recovery => "Recovery",
            SessionType::Other => "Other",
            SessionType::Custom(tag) => tag,
        }
    }
}

impl From<String> for SessionType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Training" => SessionType::Training,
            "Match" => SessionType::Match,
            "Recovery" => SessionType::Recovery,
            "Other" => SessionType::Other,
            _ => SessionType::Custom(value),
        }
    }
}

impl From<&str> for SessionType {
    fn from(value: &str) -> Self {
        SessionType::from(value.to_string())
    }
}

impl From<SessionType> for String {
    fn from(value: SessionType) -> Self {
        match value {
            SessionType::Custom(tag) => tag,
            other => other.label().to_string(),
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One drill within a session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Client- or backend-assigned identifier
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// What the drill is meant to develop
    #[serde(default)]
    pub goal: String,
    /// Kind of drill
    #[serde(default)]
    pub exercise_type: String,
    /// Technical/tactical focus
    #[serde(default)]
    pub focus: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Duration in minutes
    #[serde(default, deserialize_with = "optional_number")]
    pub duration: Option<f64>,
    /// Indicator used to judge fitness impact
    #[serde(default)]
    pub fitness_indicator: String,
}

/// One logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    /// Unique identifier assigned by the backend store
    pub id: EntryId,
    /// Calendar date as entered (usually `YYYY-MM-DD`)
    pub date: String,
    /// Training block number
    #[serde(deserialize_with = "microcycle_number")]
    pub microcycle: u32,
    /// Session category
    #[serde(default)]
    pub session_type: SessionType,
    /// Minutes of work
    #[serde(default, deserialize_with = "optional_number")]
    pub volume: Option<f64>,
    /// Percentage-like intensity scalar
    #[serde(default, deserialize_with = "optional_number")]
    pub intensity: Option<f64>,
    /// Complexity scalar
    #[serde(default, deserialize_with = "optional_number")]
    pub complexity: Option<f64>,
    /// Primary goal
    #[serde(default)]
    pub objective1: String,
    /// Secondary goal
    #[serde(default)]
    pub objective2: Option<String>,
    /// Drills, in the order they were performed
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl TrainingEntry {
    /// Parse the entry date as a calendar date.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    /// Secondary objective, with absent and blank treated alike.
    pub fn objective2(&self) -> Option<&str> {
        self.objective2.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A session as submitted to the backend, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    /// Calendar date as entered
    pub date: String,
    /// Training block number
    pub microcycle: u32,
    /// Session category
    pub session_type: SessionType,
    /// Minutes of work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Intensity scalar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Complexity scalar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    /// Primary goal
    pub objective1: String,
    /// Secondary goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective2: Option<String>,
    /// Drills in order
    pub exercises: Vec<Exercise>,
}

impl NewEntry {
    /// Check the form rules an entry must satisfy before it is submitted.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.date.trim().is_empty() {
            return Err(EntryError::MissingField("date"));
        }
        if parse_calendar_date(&self.date).is_none() {
            return Err(EntryError::InvalidDate(self.date.clone()));
        }
        if self.objective1.trim().is_empty() {
            return Err(EntryError::MissingField("objective1"));
        }

        for (field, value) in [
            ("volume", self.volume),
            ("intensity", self.intensity),
            ("complexity", self.complexity),
        ] {
            check_non_negative(field, value)?;
        }

        for exercise in &self.exercises {
            check_non_negative("duration", exercise.duration)?;
        }

        Ok(())
    }

    /// Attach the id the backend assigned, producing a stored entry.
    pub fn with_id(self, id: EntryId) -> TrainingEntry {
        TrainingEntry {
            id,
            date: self.date,
            microcycle: self.microcycle,
            session_type: self.session_type,
            volume: self.volume,
            intensity: self.intensity,
            complexity: self.complexity,
            objective1: self.objective1,
            objective2: self.objective2.filter(|s| !s.trim().is_empty()),
            exercises: self.exercises,
        }
    }
}

fn check_non_negative(field: &'static str, value: Option<f64>) -> Result<(), EntryError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(EntryError::InvalidNumber { field, value: v }),
        _ => Ok(()),
    }
}

/// Errors raised when an entry is rejected locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    /// A required field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Date could not be read as a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Numeric field was negative or not finite
    #[error("Invalid value for {field}: {value}")]
    InvalidNumber {
        /// Offending field name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}
