//! Unit tests for entry filtering.

use chrono::NaiveDate;
use trainlog::entries::{
    apply, available_microcycles, EntryId, FilterCriteria, FilterError, FilterInput,
    SessionType, TrainingEntry,
};

fn entry(id: &str, date: &str, microcycle: u32, session_type: SessionType) -> TrainingEntry {
    TrainingEntry {
        id: EntryId::new(id),
        date: date.to_string(),
        microcycle,
        session_type,
        volume: Some(60.0),
        intensity: Some(70.0),
        complexity: Some(2.0),
        objective1: "Endurance".to_string(),
        objective2: None,
        exercises: vec![],
    }
}

fn sample() -> Vec<TrainingEntry> {
    let mut sprint = entry("1", "2024-01-10", 1, SessionType::Training);
    sprint.objective1 = "Improve Sprint Speed".to_string();

    let mut tactics = entry("3", "2024-02-20", 2, SessionType::Training);
    tactics.objective2 = Some("Pressing SPRINT recovery".to_string());

    vec![
        sprint,
        entry("2", "2024-02-01", 1, SessionType::Match),
        tactics,
        entry("4", "2024-03-05", 3, SessionType::Recovery),
    ]
}

fn ids(entries: &[&TrainingEntry]) -> Vec<String> {
    entries.iter().map(|e| e.id.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_empty_criteria_is_identity() {
    let entries = sample();
    let result = apply(&entries, &FilterCriteria::default());
    assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_date_range_is_inclusive() {
    let entries = sample();
    let criteria = FilterCriteria {
        start_date: Some(date(2024, 1, 15)),
        end_date: Some(date(2024, 2, 15)),
        ..Default::default()
    };
    assert_eq!(ids(&apply(&entries, &criteria)), vec!["2"]);

    let edges = FilterCriteria {
        start_date: Some(date(2024, 1, 10)),
        end_date: Some(date(2024, 2, 20)),
        ..Default::default()
    };
    assert_eq!(ids(&apply(&entries, &edges)), vec!["1", "2", "3"]);
}

#[test]
fn test_objective_search_is_case_insensitive_over_both_objectives() {
    let entries = sample();
    let criteria = FilterCriteria {
        objective: Some("sprint".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&apply(&entries, &criteria)), vec!["1", "3"]);
}

#[test]
fn test_filters_compose_as_intersection() {
    let entries = sample();
    let by_type = FilterCriteria {
        session_type: Some(SessionType::Training),
        ..Default::default()
    };
    let by_cycle = FilterCriteria {
        microcycle: Some(1),
        ..Default::default()
    };
    let both = FilterCriteria {
        session_type: Some(SessionType::Training),
        microcycle: Some(1),
        ..Default::default()
    };

    let sequential: Vec<TrainingEntry> = apply(&entries, &by_type).into_iter().cloned().collect();
    assert_eq!(ids(&apply(&sequential, &by_cycle)), ids(&apply(&entries, &both)));
    assert_eq!(ids(&apply(&entries, &both)), vec!["1"]);
}

#[test]
fn test_result_is_subset_in_original_order() {
    let entries = sample();
    let criteria = FilterCriteria {
        session_type: Some(SessionType::Training),
        ..Default::default()
    };
    let result = apply(&entries, &criteria);

    let positions: Vec<usize> = result
        .iter()
        .map(|r| entries.iter().position(|e| e.id == r.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unparseable_entry_date_fails_date_bound() {
    let entries = vec![
        entry("1", "not a date", 1, SessionType::Training),
        entry("2", "2024-01-20", 1, SessionType::Training),
    ];
    let criteria = FilterCriteria {
        start_date: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    assert_eq!(ids(&apply(&entries, &criteria)), vec!["2"]);
    assert_eq!(apply(&entries, &FilterCriteria::default()).len(), 2);
}

#[test]
fn test_input_parsing() {
    let input = FilterInput {
        session_type: "Match".to_string(),
        microcycle: " 4 ".to_string(),
        objective: "  ".to_string(),
        start_date: "2024-01-15".to_string(),
        end_date: String::new(),
    };
    let criteria = input.parse().unwrap();

    assert_eq!(criteria.session_type, Some(SessionType::Match));
    assert_eq!(criteria.microcycle, Some(4));
    assert_eq!(criteria.objective, None);
    assert_eq!(criteria.start_date, Some(date(2024, 1, 15)));
    assert_eq!(criteria.end_date, None);
}

#[test]
fn test_malformed_input_is_rejected() {
    let bad_cycle = FilterInput {
        microcycle: "three".to_string(),
        ..Default::default()
    };
    assert!(matches!(bad_cycle.parse(), Err(FilterError::InvalidMicrocycle(_))));

    let bad_date = FilterInput {
        end_date: "2024-13-45".to_string(),
        ..Default::default()
    };
    assert!(matches!(bad_date.parse(), Err(FilterError::InvalidDate(_))));
}

#[test]
fn test_available_microcycles_sorted_and_distinct() {
    let entries = sample();
    assert_eq!(available_microcycles(&entries), vec![1, 2, 3]);
}
