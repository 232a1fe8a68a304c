//! Unit tests for dashboard and microcycle summaries.

use trainlog::entries::{EntryId, SessionType, TrainingEntry};
use trainlog::metrics::{summarize, summarize_microcycle, DashboardMetrics};

fn entry(id: &str, volume: Option<f64>, intensity: Option<f64>, complexity: Option<f64>) -> TrainingEntry {
    TrainingEntry {
        id: EntryId::new(id),
        date: "2024-01-01".to_string(),
        microcycle: 3,
        session_type: SessionType::Training,
        volume,
        intensity,
        complexity,
        objective1: "Base".to_string(),
        objective2: None,
        exercises: vec![],
    }
}

#[test]
fn test_empty_set() {
    let entries: Vec<TrainingEntry> = vec![];
    assert_eq!(summarize(&entries), DashboardMetrics::default());
    assert_eq!(summarize_microcycle(&entries).total_volume, 0.0);
}

#[test]
fn test_microcycle_totals() {
    let entries = vec![
        entry("1", Some(60.0), Some(70.0), Some(2.0)),
        entry("2", Some(45.0), Some(80.0), None),
    ];
    let totals = summarize_microcycle(&entries);

    assert_eq!(totals.total_volume, 105.0);
    assert_eq!(totals.total_intensity, 150.0);
    assert_eq!(totals.total_complexity, 2.0);
}

#[test]
fn test_absent_volume_counts_as_zero() {
    let entries = vec![entry("1", None, None, None), entry("2", Some(30.0), None, None)];
    let metrics = summarize(&entries);

    assert_eq!(metrics.session_count, 2);
    assert_eq!(metrics.total_minutes, 30.0);
}

#[test]
fn test_summary_is_additive_over_disjoint_sets() {
    let a = vec![entry("1", Some(60.0), None, None), entry("2", Some(15.0), None, None)];
    let b = vec![entry("3", Some(90.0), None, None)];

    let left = summarize(&a);
    let right = summarize(&b);
    let whole = summarize(a.iter().chain(b.iter()));

    assert_eq!(whole.session_count, left.session_count + right.session_count);
    assert_eq!(whole.total_minutes, left.total_minutes + right.total_minutes);
}
