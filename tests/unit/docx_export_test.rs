//! Unit tests for the Word document export.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use trainlog::entries::{EntryId, Exercise, SessionType, TrainingEntry};
use trainlog::export::{export_entry, export_microcycle, ExportFormat, EXERCISE_COLUMNS};

fn exercise(goal: &str, duration: Option<f64>) -> Exercise {
    Exercise {
        id: Some(format!("ex-{}", goal)),
        goal: goal.to_string(),
        exercise_type: "Drill".to_string(),
        focus: "Technique".to_string(),
        description: format!("{} & more", goal),
        duration,
        fitness_indicator: "RPE".to_string(),
    }
}

fn create_test_entry() -> TrainingEntry {
    TrainingEntry {
        id: EntryId::new("7"),
        date: "2024-02-01".to_string(),
        microcycle: 3,
        session_type: SessionType::Training,
        volume: Some(60.0),
        intensity: Some(70.0),
        complexity: Some(2.0),
        objective1: "Improve Sprint Speed".to_string(),
        objective2: None,
        exercises: vec![exercise("Acceleration", Some(15.0)), exercise("Finishing", None)],
    }
}

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Text of every `w:t` element, in document order.
fn text_runs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut runs = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Text(text) => runs.push(text.unescape().unwrap().into_owned()),
            Event::Eof => break,
            _ => {}
        }
    }
    runs
}

#[test]
fn test_session_document_is_a_valid_package() {
    let doc = export_entry(&create_test_entry(), ExportFormat::Docx).unwrap();

    assert_eq!(doc.filename, "Training_Session_2024-02-01.docx");
    assert_eq!(&doc.bytes[..2], b"PK");

    let archive = zip::ZipArchive::new(Cursor::new(doc.bytes.as_slice())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"[Content_Types].xml"));
    assert!(names.contains(&"word/styles.xml"));
}

#[test]
fn test_session_table_header_then_rows_in_order() {
    let doc = export_entry(&create_test_entry(), ExportFormat::Docx).unwrap();
    let runs = text_runs(&document_xml(&doc.bytes));

    let header_start = runs.iter().position(|r| r == "Goal").unwrap();
    let header: Vec<&str> = runs[header_start..header_start + 6]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(header, EXERCISE_COLUMNS);

    let first = runs.iter().position(|r| r == "Acceleration").unwrap();
    let second = runs.iter().position(|r| r == "Finishing").unwrap();
    assert!(header_start < first && first < second);

    assert!(runs.contains(&"15 minutes".to_string()));
    assert!(runs.contains(&"Acceleration & more".to_string()));
}

#[test]
fn test_session_fields_with_placeholder() {
    let doc = export_entry(&create_test_entry(), ExportFormat::Docx).unwrap();
    let runs = text_runs(&document_xml(&doc.bytes));

    assert_eq!(runs[0], "Training Session on 2024-02-01");
    assert!(runs.contains(&"Objective 2: N/A".to_string()));
    assert!(runs.contains(&"Exercises".to_string()));
}

#[test]
fn test_microcycle_document_summary() {
    let mut second = create_test_entry();
    second.id = EntryId::new("8");
    second.date = "2024-02-03".to_string();
    second.volume = Some(45.0);
    second.intensity = Some(80.0);
    second.complexity = None;

    let doc = export_microcycle(
        Some(3),
        &[create_test_entry(), second],
        ExportFormat::Docx,
    )
    .unwrap();
    let runs = text_runs(&document_xml(&doc.bytes));

    assert_eq!(doc.filename, "Training_Microcycle_3.docx");
    assert_eq!(runs[0], "Training Microcycle 3");
    assert!(runs.contains(&"Date: 2024-02-01".to_string()));
    assert!(runs.contains(&"Summary for Microcycle 3".to_string()));
    assert!(runs.contains(&"Total Volume: 105 minutes".to_string()));
    assert!(runs.contains(&"Total Intensity: 150%".to_string()));
    assert!(runs.contains(&"Total Complexity: 2".to_string()));
}

#[test]
fn test_output_is_deterministic() {
    let entry = create_test_entry();
    let a = export_entry(&entry, ExportFormat::Docx).unwrap();
    let b = export_entry(&entry, ExportFormat::Docx).unwrap();
    assert_eq!(a.bytes, b.bytes);
}
