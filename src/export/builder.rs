//! Format-neutral document construction.
//!
//! Export templates talk to a [`DocumentBuilder`]; the concrete container
//! (DOCX, plain text) is picked only when the builder is created.

use super::types::ExportError;

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Run text
    pub text: String,
    /// Render in bold
    pub bold: bool,
    /// Start the run on a new line within the same paragraph
    pub line_break: bool,
}

impl TextRun {
    /// Plain run continuing the current line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            line_break: false,
        }
    }

    /// Bold run continuing the current line.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    /// Plain run starting on a new line.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            line_break: true,
            ..Self::plain(text)
        }
    }
}

/// Paragraph layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    /// Body text
    #[default]
    Normal,
    /// Body text with extra space after, used for labeled field lines
    Spaced,
    /// Indented nested listing
    Indented,
}

/// Sink for document structure.
pub trait DocumentBuilder {
    /// Append the document title.
    fn title(&mut self, text: &str) -> Result<(), ExportError>;

    /// Append a section heading.
    fn heading(&mut self, text: &str) -> Result<(), ExportError>;

    /// Append a paragraph made of runs.
    fn paragraph(&mut self, style: ParagraphStyle, runs: &[TextRun]) -> Result<(), ExportError>;

    /// Append a table with a header row followed by body rows.
    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<(), ExportError>;

    /// Close the document and return the file bytes.
    fn finish(self) -> Result<Vec<u8>, ExportError>
    where
        Self: Sized;

    /// Append a single-run paragraph.
    fn text(&mut self, style: ParagraphStyle, text: &str) -> Result<(), ExportError> {
        self.paragraph(style, &[TextRun::plain(text)])
    }
}
