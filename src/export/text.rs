//! Plain-text document rendering.

use std::fmt::Write;

use super::builder::{DocumentBuilder, ParagraphStyle, TextRun};
use super::types::ExportError;

const INDENT: &str = "    ";

/// Renders documents as plain UTF-8 text.
///
/// Titles are underlined with `=`, headings with `-`; tables are pipe
/// separated with a rule under the header.
#[derive(Debug, Default)]
pub struct TextBuilder {
    out: String,
}

impl TextBuilder {
    /// Create an empty text document.
    pub fn new() -> Self {
        Self::default()
    }

    fn underlined(&mut self, text: &str, rule: char) -> Result<(), ExportError> {
        let width = text.chars().count();
        writeln!(self.out, "{}", text).map_err(fmt_error)?;
        writeln!(self.out, "{}", rule.to_string().repeat(width)).map_err(fmt_error)?;
        writeln!(self.out).map_err(fmt_error)
    }
}

fn fmt_error(e: std::fmt::Error) -> ExportError {
    ExportError::IoError(std::io::Error::other(e))
}

impl DocumentBuilder for TextBuilder {
    fn title(&mut self, text: &str) -> Result<(), ExportError> {
        self.underlined(text, '=')
    }

    fn heading(&mut self, text: &str) -> Result<(), ExportError> {
        self.underlined(text, '-')
    }

    fn paragraph(&mut self, style: ParagraphStyle, runs: &[TextRun]) -> Result<(), ExportError> {
        let indent = match style {
            ParagraphStyle::Indented => INDENT,
            ParagraphStyle::Normal | ParagraphStyle::Spaced => "",
        };

        self.out.push_str(indent);
        for (i, run) in runs.iter().enumerate() {
            if run.line_break && i > 0 {
                self.out.push('\n');
                self.out.push_str(indent);
            }
            if run.bold {
                write!(self.out, "**{}**", run.text).map_err(fmt_error)?;
            } else {
                self.out.push_str(&run.text);
            }
        }
        self.out.push('\n');

        if style == ParagraphStyle::Spaced || style == ParagraphStyle::Indented {
            self.out.push('\n');
        }
        Ok(())
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<(), ExportError> {
        writeln!(self.out, "{}", header.join(" | ")).map_err(fmt_error)?;

        let rule: Vec<String> = header.iter().map(|h| "-".repeat(h.chars().count())).collect();
        writeln!(self.out, "{}", rule.join("-|-")).map_err(fmt_error)?;

        for row in rows {
            writeln!(self.out, "{}", row.join(" | ")).map_err(fmt_error)?;
        }
        writeln!(self.out).map_err(fmt_error)
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_heading_are_underlined() {
        let mut builder = TextBuilder::new();
        builder.title("Plan").unwrap();
        builder.heading("Week").unwrap();

        let text = String::from_utf8(builder.finish().unwrap()).unwrap();
        assert!(text.starts_with("Plan\n====\n\nWeek\n----\n"));
    }

    #[test]
    fn test_line_break_runs_split_lines() {
        let mut builder = TextBuilder::new();
        builder
            .paragraph(
                ParagraphStyle::Indented,
                &[TextRun::plain("- Goal: A"), TextRun::line("- Type: B")],
            )
            .unwrap();

        let text = String::from_utf8(builder.finish().unwrap()).unwrap();
        assert_eq!(text, "    - Goal: A\n    - Type: B\n\n");
    }

    #[test]
    fn test_table_rows() {
        let mut builder = TextBuilder::new();
        builder
            .table(&["Goal", "Type"], &[vec!["Speed".to_string(), "Sprint".to_string()]])
            .unwrap();

        let text = String::from_utf8(builder.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Goal | Type");
        assert_eq!(lines[2], "Speed | Sprint");
    }
}
