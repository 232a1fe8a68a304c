//! Microcycle export: every session of a block plus load totals.

use crate::entries::{Exercise, TrainingEntry};
use crate::metrics::summarize_microcycle;

use super::builder::{DocumentBuilder, ParagraphStyle, TextRun};
use super::docx::DocxBuilder;
use super::text::TextBuilder;
use super::types::{
    display_minutes, display_number, microcycle_filename, ExportError, ExportFormat,
    ExportValidation, ExportedDocument, NOT_AVAILABLE,
};

/// Export all sessions of `microcycle` found in `entries`.
///
/// Refuses with a validation error when no microcycle is selected or there is
/// nothing to export. `entries` is re-filtered to the microcycle, so callers
/// may pass the full store.
pub fn export_microcycle(
    microcycle: Option<u32>,
    entries: &[TrainingEntry],
    format: ExportFormat,
) -> Result<ExportedDocument, ExportError> {
    let Some(microcycle) = microcycle else {
        tracing::warn!("Microcycle export refused: no microcycle selected");
        return Err(ExportValidation::NoMicrocycleSelected.into());
    };

    if entries.is_empty() {
        tracing::warn!("Microcycle export refused: no entries");
        return Err(ExportValidation::NoEntries.into());
    }

    let selected: Vec<&TrainingEntry> = entries
        .iter()
        .filter(|e| e.microcycle == microcycle)
        .collect();

    if selected.is_empty() {
        tracing::warn!("Microcycle export refused: no entries in microcycle {}", microcycle);
        return Err(ExportValidation::NoEntries.into());
    }

    let bytes = match format {
        ExportFormat::Docx => {
            let mut builder = DocxBuilder::new()?;
            write_microcycle(&mut builder, microcycle, &selected)?;
            builder.finish()?
        }
        ExportFormat::Text => {
            let mut builder = TextBuilder::new();
            write_microcycle(&mut builder, microcycle, &selected)?;
            builder.finish()?
        }
    };

    let filename = microcycle_filename(microcycle, format);
    tracing::info!(
        "Exported microcycle {} ({} sessions) to {}",
        microcycle,
        selected.len(),
        filename
    );

    Ok(ExportedDocument {
        filename,
        format,
        bytes,
    })
}

/// Lay out a microcycle: title, one block per session, then the summary.
pub fn write_microcycle<B: DocumentBuilder>(
    builder: &mut B,
    microcycle: u32,
    entries: &[&TrainingEntry],
) -> Result<(), ExportError> {
    builder.title(&format!("Training Microcycle {}", microcycle))?;

    for entry in entries {
        write_entry_block(builder, entry)?;
    }

    let totals = summarize_microcycle(entries.iter().copied());

    builder.heading(&format!("Summary for Microcycle {}", microcycle))?;
    builder.text(
        ParagraphStyle::Normal,
        &format!("Total Volume: {} minutes", totals.total_volume),
    )?;
    builder.text(
        ParagraphStyle::Normal,
        &format!("Total Intensity: {}%", totals.total_intensity),
    )?;
    builder.text(
        ParagraphStyle::Normal,
        &format!("Total Complexity: {}", totals.total_complexity),
    )
}

fn write_entry_block<B: DocumentBuilder>(
    builder: &mut B,
    entry: &TrainingEntry,
) -> Result<(), ExportError> {
    let runs = [
        TextRun::bold(format!("Date: {}", entry.date)),
        TextRun::line(format!("Session Type: {}", entry.session_type)),
        TextRun::line(format!("Volume: {}", display_number(entry.volume))),
        TextRun::line(format!("Intensity: {}", display_number(entry.intensity))),
        TextRun::line(format!("Complexity: {}", display_number(entry.complexity))),
        TextRun::line(format!("Objective 1: {}", entry.objective1)),
        TextRun::line(format!(
            "Objective 2: {}",
            entry.objective2().unwrap_or(NOT_AVAILABLE)
        )),
        TextRun::line("Exercises:"),
    ];
    builder.paragraph(ParagraphStyle::Spaced, &runs)?;

    for exercise in &entry.exercises {
        builder.paragraph(ParagraphStyle::Indented, &exercise_lines(exercise))?;
    }

    Ok(())
}

fn exercise_lines(exercise: &Exercise) -> [TextRun; 6] {
    [
        TextRun::plain(format!("- Goal: {}", exercise.goal)),
        TextRun::line(format!("- Type: {}", exercise.exercise_type)),
        TextRun::line(format!("- Focus: {}", exercise.focus)),
        TextRun::line(format!("- Description: {}", exercise.description)),
        TextRun::line(format!("- Duration: {}", display_minutes(exercise.duration))),
        TextRun::line(format!("- Fitness Indicator: {}", exercise.fitness_indicator)),
    ]
}
