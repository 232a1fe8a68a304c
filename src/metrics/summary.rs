//! Summary metrics over a set of entries.
//!
//! Always recomputed from the full visible set; absent loads count as 0.

use crate::entries::TrainingEntry;

/// Dashboard-level totals for the visible entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardMetrics {
    /// Number of sessions
    pub session_count: usize,
    /// Sum of session volumes in minutes
    pub total_minutes: f64,
}

/// Load totals for one microcycle, used in exports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MicrocycleTotals {
    /// Sum of volumes in minutes
    pub total_volume: f64,
    /// Sum of intensities
    pub total_intensity: f64,
    /// Sum of complexities
    pub total_complexity: f64,
}

/// Count sessions and sum their minutes.
pub fn summarize<'a, I>(entries: I) -> DashboardMetrics
where
    I: IntoIterator<Item = &'a TrainingEntry>,
{
    entries
        .into_iter()
        .fold(DashboardMetrics::default(), |acc, entry| DashboardMetrics {
            session_count: acc.session_count + 1,
            total_minutes: acc.total_minutes + entry.volume.unwrap_or(0.0),
        })
}

/// Sum volume, intensity and complexity.
pub fn summarize_microcycle<'a, I>(entries: I) -> MicrocycleTotals
where
    I: IntoIterator<Item = &'a TrainingEntry>,
{
    entries
        .into_iter()
        .fold(MicrocycleTotals::default(), |acc, entry| MicrocycleTotals {
            total_volume: acc.total_volume + entry.volume.unwrap_or(0.0),
            total_intensity: acc.total_intensity + entry.intensity.unwrap_or(0.0),
            total_complexity: acc.total_complexity + entry.complexity.unwrap_or(0.0),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{EntryId, SessionType};

    fn entry(id: &str, volume: Option<f64>, intensity: Option<f64>) -> TrainingEntry {
        TrainingEntry {
            id: EntryId::new(id),
            date: "2024-01-01".to_string(),
            microcycle: 3,
            session_type: SessionType::Training,
            volume,
            intensity,
            complexity: None,
            objective1: "Base".to_string(),
            objective2: None,
            exercises: vec![],
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        let none: Vec<TrainingEntry> = vec![];
        assert_eq!(summarize(&none), DashboardMetrics::default());
        assert_eq!(summarize_microcycle(&none), MicrocycleTotals::default());
    }

    #[test]
    fn test_missing_volume_counts_as_zero() {
        let entries = vec![entry("1", None, None), entry("2", Some(45.0), None)];
        let metrics = summarize(&entries);

        assert_eq!(metrics.session_count, 2);
        assert_eq!(metrics.total_minutes, 45.0);
    }

    #[test]
    fn test_microcycle_totals() {
        let mut first = entry("1", Some(60.0), Some(70.0));
        first.complexity = Some(3.0);
        let entries = vec![first, entry("2", Some(45.0), Some(80.0))];

        let totals = summarize_microcycle(&entries);
        assert_eq!(totals.total_volume, 105.0);
        assert_eq!(totals.total_intensity, 150.0);
        assert_eq!(totals.total_complexity, 3.0);
    }
}
