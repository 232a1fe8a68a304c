//! Unit tests for the entry wire format.

use trainlog::entries::{EntryId, Exercise, NewEntry, SessionType, TrainingEntry};

#[test]
fn test_decode_backend_entry() {
    let json = r#"{
        "id": 42,
        "date": "2024-02-01",
        "microcycle": 3,
        "sessionType": "Match",
        "volume": 90,
        "intensity": 85.5,
        "objective1": "Win",
        "objective2": "",
        "exercises": [
            {"id": 1, "goal": "Activation", "exerciseType": "Warm-up", "focus": "Mobility",
             "description": "Dynamic stretching", "duration": 15, "fitnessIndicator": "HR"}
        ]
    }"#;
    let entry: TrainingEntry = serde_json::from_str(json).unwrap();

    assert_eq!(entry.id, EntryId::new("42"));
    assert_eq!(entry.session_type, SessionType::Match);
    assert_eq!(entry.intensity, Some(85.5));
    assert_eq!(entry.complexity, None);
    assert_eq!(entry.objective2(), None);
    assert_eq!(entry.exercises[0].id.as_deref(), Some("1"));
    assert_eq!(entry.exercises[0].exercise_type, "Warm-up");
    assert_eq!(entry.exercises[0].duration, Some(15.0));
}

#[test]
fn test_unknown_session_type_survives() {
    let json = r#"{"id":"a","date":"2024-01-01","microcycle":1,"sessionType":"Gym",
        "objective1":"Strength"}"#;
    let entry: TrainingEntry = serde_json::from_str(json).unwrap();

    assert_eq!(entry.session_type, SessionType::Custom("Gym".to_string()));
    assert!(entry.exercises.is_empty());

    let back = serde_json::to_value(&entry).unwrap();
    assert_eq!(back["sessionType"], "Gym");
}

#[test]
fn test_new_entry_body_has_no_id() {
    let entry = NewEntry {
        date: "2024-03-01".to_string(),
        microcycle: 2,
        session_type: SessionType::Training,
        volume: Some(60.0),
        objective1: "Speed".to_string(),
        exercises: vec![Exercise {
            goal: "Sprints".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let body = serde_json::to_value(&entry).unwrap();

    assert!(body.get("id").is_none());
    assert_eq!(body["sessionType"], "Training");
    assert_eq!(body["exercises"][0]["goal"], "Sprints");
    assert!(body.get("intensity").is_none());
}
