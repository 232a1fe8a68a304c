//! Single-session export.

use crate::entries::{Exercise, TrainingEntry};

use super::builder::{DocumentBuilder, ParagraphStyle};
use super::docx::DocxBuilder;
use super::text::TextBuilder;
use super::types::{
    display_minutes, display_number, session_filename, ExportError, ExportFormat,
    ExportedDocument, NOT_AVAILABLE,
};

/// Column headings of the exercise table, in order.
pub const EXERCISE_COLUMNS: [&str; 6] = [
    "Goal",
    "Type",
    "Focus",
    "Description",
    "Duration",
    "Fitness Indicator",
];

/// Export one session as a document.
pub fn export_entry(
    entry: &TrainingEntry,
    format: ExportFormat,
) -> Result<ExportedDocument, ExportError> {
    let bytes = match format {
        ExportFormat::Docx => {
            let mut builder = DocxBuilder::new()?;
            write_entry(&mut builder, entry)?;
            builder.finish()?
        }
        ExportFormat::Text => {
            let mut builder = TextBuilder::new();
            write_entry(&mut builder, entry)?;
            builder.finish()?
        }
    };

    let filename = session_filename(&entry.date, format);
    tracing::info!(
        "Exported session {} ({} exercises) to {}",
        entry.id,
        entry.exercises.len(),
        filename
    );

    Ok(ExportedDocument {
        filename,
        format,
        bytes,
    })
}

/// Lay out a session: title, labeled fields, then the exercise table.
pub fn write_entry<B: DocumentBuilder>(
    builder: &mut B,
    entry: &TrainingEntry,
) -> Result<(), ExportError> {
    builder.title(&format!("Training Session on {}", entry.date))?;

    let fields = [
        format!("Microcycle: {}", entry.microcycle),
        format!("Session Type: {}", entry.session_type),
        format!("Volume: {}", display_number(entry.volume)),
        format!("Intensity: {}", display_number(entry.intensity)),
        format!("Objective 1: {}", entry.objective1),
        format!("Objective 2: {}", entry.objective2().unwrap_or(NOT_AVAILABLE)),
    ];
    for field in &fields {
        builder.text(ParagraphStyle::Spaced, field)?;
    }

    builder.heading("Exercises")?;

    let rows: Vec<Vec<String>> = entry.exercises.iter().map(exercise_row).collect();
    builder.table(&EXERCISE_COLUMNS, &rows)
}

fn exercise_row(exercise: &Exercise) -> Vec<String> {
    vec![
        exercise.goal.clone(),
        exercise.exercise_type.clone(),
        exercise.focus.clone(),
        exercise.description.clone(),
        display_minutes(exercise.duration),
        exercise.fitness_indicator.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{EntryId, SessionType};

    fn sample_entry() -> TrainingEntry {
        TrainingEntry {
            id: EntryId::new("1"),
            date: "2024-03-01".to_string(),
            microcycle: 3,
            session_type: SessionType::Training,
            volume: Some(60.0),
            intensity: Some(70.0),
            complexity: Some(2.0),
            objective1: "Improve Sprint Speed".to_string(),
            objective2: None,
            exercises: vec![
                Exercise {
                    id: Some("e1".to_string()),
                    goal: "Acceleration".to_string(),
                    exercise_type: "Sprint".to_string(),
                    focus: "First step".to_string(),
                    description: "6x20m".to_string(),
                    duration: Some(15.0),
                    fitness_indicator: "Speed".to_string(),
                },
                Exercise {
                    id: Some("e2".to_string()),
                    goal: "Cool down".to_string(),
                    exercise_type: "Jog".to_string(),
                    focus: "Recovery".to_string(),
                    description: "Easy laps".to_string(),
                    duration: Some(10.0),
                    fitness_indicator: "HR".to_string(),
                },
            ],
        }
    }

    fn text_export(entry: &TrainingEntry) -> String {
        let doc = export_entry(entry, ExportFormat::Text).unwrap();
        String::from_utf8(doc.bytes).unwrap()
    }

    #[test]
    fn test_filename_uses_date() {
        let doc = export_entry(&sample_entry(), ExportFormat::Docx).unwrap();
        assert_eq!(doc.filename, "Training_Session_2024-03-01.docx");
        assert_eq!(doc.format, ExportFormat::Docx);
    }

    #[test]
    fn test_fields_and_placeholder() {
        let text = text_export(&sample_entry());

        assert!(text.starts_with("Training Session on 2024-03-01\n"));
        assert!(text.contains("Microcycle: 3\n"));
        assert!(text.contains("Session Type: Training\n"));
        assert!(text.contains("Volume: 60\n"));
        assert!(text.contains("Intensity: 70\n"));
        assert!(text.contains("Objective 1: Improve Sprint Speed\n"));
        assert!(text.contains("Objective 2: N/A\n"));
    }

    #[test]
    fn test_exercise_rows_in_order_with_unit() {
        let text = text_export(&sample_entry());

        assert!(text.contains("Goal | Type | Focus | Description | Duration | Fitness Indicator"));
        let first = text.find("Acceleration | Sprint").unwrap();
        let second = text.find("Cool down | Jog").unwrap();
        assert!(first < second);
        assert!(text.contains("| 15 minutes |"));
    }

    #[test]
    fn test_empty_exercise_list_still_has_header() {
        let mut entry = sample_entry();
        entry.exercises.clear();

        let text = text_export(&entry);
        assert!(text.contains("Exercises\n"));
        assert!(text.contains("Fitness Indicator"));
    }
}
