//! Document export for single sessions and whole microcycles.

pub mod builder;
pub mod docx;
pub mod microcycle;
pub mod session;
pub mod text;
pub mod types;

pub use builder::{DocumentBuilder, ParagraphStyle, TextRun};
pub use docx::DocxBuilder;
pub use microcycle::export_microcycle;
pub use session::{export_entry, EXERCISE_COLUMNS};
pub use text::TextBuilder;
pub use types::{
    microcycle_filename, sanitize_file_component, session_filename, ExportError, ExportFormat,
    ExportValidation, ExportedDocument, NOT_AVAILABLE,
};
