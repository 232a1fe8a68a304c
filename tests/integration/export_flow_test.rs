//! Integration tests for exporting from the dashboard and saving to disk.

use trainlog::config::{load_config_from, save_config_to, AppConfig};
use trainlog::entries::{EntryId, FilterInput, SessionType, TrainingEntry};
use trainlog::export::{ExportFormat, ExportValidation};
use trainlog::state::{DashboardEvent, DashboardState};

fn entry(id: &str, date: &str, microcycle: u32, volume: f64, intensity: f64) -> TrainingEntry {
    TrainingEntry {
        id: EntryId::new(id),
        date: date.to_string(),
        microcycle,
        session_type: SessionType::Training,
        volume: Some(volume),
        intensity: Some(intensity),
        complexity: Some(1.0),
        objective1: format!("Objective {}", id),
        objective2: None,
        exercises: vec![],
    }
}

fn loaded_state() -> DashboardState {
    let mut state = DashboardState::new();
    state.apply(DashboardEvent::EntriesLoaded(vec![
        entry("1", "2024-01-01", 3, 60.0, 70.0),
        entry("2", "2024-01-03", 3, 45.0, 80.0),
        entry("3", "2024/01/08", 4, 30.0, 50.0),
    ]));
    state
}

#[test]
fn test_microcycle_export_requires_selection() {
    let mut state = loaded_state();
    let err = state
        .export_selected_microcycle(ExportFormat::Docx)
        .unwrap_err();

    assert_eq!(err.validation(), Some(ExportValidation::NoMicrocycleSelected));
    assert!(state.notice().unwrap().blocking);
}

#[test]
fn test_microcycle_export_and_save() {
    let mut state = loaded_state();
    state.apply(DashboardEvent::FiltersChanged(FilterInput {
        microcycle: "3".to_string(),
        ..Default::default()
    }));

    let doc = state
        .export_selected_microcycle(ExportFormat::Text)
        .unwrap();
    let text = String::from_utf8(doc.bytes.clone()).unwrap();
    assert!(text.contains("Total Volume: 105 minutes"));
    assert!(text.contains("Total Intensity: 150%"));
    assert!(text.contains("Total Complexity: 2"));

    let dir = tempfile::tempdir().unwrap();
    let path = doc.save_to(dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "Training_Microcycle_3.txt");
    assert_eq!(std::fs::read(&path).unwrap(), doc.bytes);
}

#[test]
fn test_session_export_filename_is_sanitized() {
    let mut state = loaded_state();
    let doc = state
        .export_entry(&EntryId::new("3"), ExportFormat::Docx)
        .unwrap();

    assert_eq!(doc.filename, "Training_Session_2024_01_08.docx");

    let dir = tempfile::tempdir().unwrap();
    let path = doc.save_to(&dir.path().join("exports")).unwrap();
    assert!(path.exists());
}

#[test]
fn test_export_settings_survive_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.export.format = ExportFormat::Text;
    config.export.ask_for_location = false;
    config.export.directory = dir.path().join("out");
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.export, config.export);

    let mut state = loaded_state();
    let doc = state
        .export_entry(&EntryId::new("1"), loaded.export.format)
        .unwrap();
    let saved = doc.save_to(&loaded.export.resolved_directory()).unwrap();
    assert_eq!(saved, dir.path().join("out").join("Training_Session_2024-01-01.txt"));
}
