//! Integration tests for the dashboard load, filter and create flow.

use trainlog::entries::{EntryId, FilterInput, NewEntry, SessionType, TrainingEntry};
use trainlog::state::{DashboardEvent, DashboardState, LoadStatus, NoticeLevel};

/// Entries as the backend would return them.
fn backend_entries() -> Vec<TrainingEntry> {
    let json = r#"{"entries": [
        {"id": 1, "date": "2024-01-10", "microcycle": 2, "sessionType": "Training",
         "volume": 50, "intensity": 60, "complexity": 1,
         "objective1": "Aerobic base", "exercises": []},
        {"id": 2, "date": "2024-02-01", "microcycle": 3, "sessionType": "Training",
         "volume": 60, "intensity": 70, "complexity": 2,
         "objective1": "Improve Sprint Speed", "exercises": []},
        {"id": 3, "date": "2024-02-08", "microcycle": 3, "sessionType": "Match",
         "volume": 45, "intensity": 80,
         "objective1": "League match", "objective2": "Sprint transitions", "exercises": []},
        {"id": 4, "date": "2024-03-01", "microcycle": 4, "sessionType": "Recovery",
         "objective1": "Regeneration", "exercises": []}
    ]}"#;
    let response: trainlog::api::EntriesResponse = serde_json::from_str(json).unwrap();
    response.into_entries()
}

fn loaded_state() -> DashboardState {
    let mut state = DashboardState::new();
    state.apply(DashboardEvent::LoadStarted);
    assert_eq!(state.load_status(), &LoadStatus::Loading);
    state.apply(DashboardEvent::EntriesLoaded(backend_entries()));
    state
}

fn visible_ids(state: &DashboardState) -> Vec<String> {
    state
        .visible_entries()
        .iter()
        .map(|e| e.id.to_string())
        .collect()
}

#[test]
fn test_initial_load_shows_all_with_totals() {
    let state = loaded_state();

    assert_eq!(visible_ids(&state), vec!["1", "2", "3", "4"]);
    assert_eq!(state.metrics().session_count, 4);
    assert_eq!(state.metrics().total_minutes, 155.0);
    assert_eq!(state.microcycles(), vec![2, 3, 4]);
}

#[test]
fn test_date_range_filter() {
    let mut state = loaded_state();
    state.apply(DashboardEvent::FiltersChanged(FilterInput {
        start_date: "2024-01-15".to_string(),
        end_date: "2024-02-05".to_string(),
        ..Default::default()
    }));

    assert_eq!(visible_ids(&state), vec!["2"]);
    assert_eq!(state.metrics().total_minutes, 60.0);
}

#[test]
fn test_objective_filter_matches_either_objective() {
    let mut state = loaded_state();
    state.apply(DashboardEvent::FiltersChanged(FilterInput {
        objective: "sprint".to_string(),
        ..Default::default()
    }));

    assert_eq!(visible_ids(&state), vec!["2", "3"]);
}

#[test]
fn test_clearing_filters_restores_everything() {
    let mut state = loaded_state();
    state.apply(DashboardEvent::FiltersChanged(FilterInput {
        session_type: "Match".to_string(),
        ..Default::default()
    }));
    assert_eq!(visible_ids(&state), vec!["3"]);

    state.apply(DashboardEvent::FiltersChanged(FilterInput::default()));
    assert_eq!(visible_ids(&state).len(), 4);
}

#[test]
fn test_create_appends_and_updates_metrics() {
    let mut state = loaded_state();
    state.apply(DashboardEvent::FiltersChanged(FilterInput {
        microcycle: "3".to_string(),
        ..Default::default()
    }));
    assert_eq!(state.metrics().total_minutes, 105.0);

    state.begin_create().unwrap();
    assert!(state.is_creating());

    let entry = NewEntry {
        date: "2024-02-10".to_string(),
        microcycle: 3,
        session_type: SessionType::Training,
        volume: Some(30.0),
        objective1: "Finishing".to_string(),
        ..Default::default()
    };
    state.apply(DashboardEvent::EntryCreated {
        entry,
        id: EntryId::new("99"),
    });

    assert!(!state.is_creating());
    assert_eq!(state.all_entries().len(), 5);
    assert_eq!(state.all_entries().last().unwrap().id, EntryId::new("99"));
    assert_eq!(visible_ids(&state), vec!["2", "3", "99"]);
    assert_eq!(state.metrics().total_minutes, 135.0);
    assert_eq!(state.notice().unwrap().level, NoticeLevel::Info);
}

#[test]
fn test_failed_create_leaves_store_unchanged() {
    let mut state = loaded_state();
    state.begin_create().unwrap();
    state.apply(DashboardEvent::CreateFailed(
        "Server rejected the request (400): Missing date".to_string(),
    ));

    assert_eq!(state.all_entries().len(), 4);
    assert!(!state.is_creating());
    let notice = state.notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("Missing date"));
}

#[test]
fn test_reload_replaces_entries() {
    let mut state = loaded_state();
    let mut fresh = backend_entries();
    fresh.truncate(2);

    state.apply(DashboardEvent::LoadStarted);
    state.apply(DashboardEvent::EntriesLoaded(fresh));

    assert_eq!(state.all_entries().len(), 2);
    assert_eq!(state.metrics().session_count, 2);
}
