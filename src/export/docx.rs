//! DOCX (WordprocessingML) document generation.
//!
//! The body is streamed with quick-xml; the static package parts are
//! constants. All zip entries carry the same fixed timestamp, so identical
//! input yields identical bytes.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::builder::{DocumentBuilder, ParagraphStyle, TextRun};
use super::types::ExportError;

/// WordprocessingML main namespace
const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Printable width of a US Letter page with 1" margins, in twentieths of a point.
const TEXT_WIDTH_TWIPS: u32 = 9360;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="300"/></w:pPr><w:rPr><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/><w:szCs w:val="32"/></w:rPr></w:style><w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style><w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/></w:tblBorders></w:tblPr></w:style></w:styles>"#;

/// Builds a `.docx` package.
pub struct DocxBuilder {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl DocxBuilder {
    /// Start a new document body.
    pub fn new() -> Result<Self, ExportError> {
        let mut builder = Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        };

        builder.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

        let mut root = BytesStart::new("w:document");
        root.push_attribute(("xmlns:w", NS_W));
        builder.write(Event::Start(root))?;
        builder.start("w:body")?;

        Ok(builder)
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), ExportError> {
        self.writer
            .write_event(event)
            .map_err(|e| ExportError::XmlError(e.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<(), ExportError> {
        self.write(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), ExportError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Write a self-closing element with attributes.
    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), ExportError> {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.write(Event::Empty(element))
    }

    /// Write a paragraph: optional properties, then runs.
    fn write_paragraph(
        &mut self,
        style_id: Option<&str>,
        spacing_after: Option<&str>,
        indent_left: Option<&str>,
        runs: &[TextRun],
    ) -> Result<(), ExportError> {
        self.start("w:p")?;

        if style_id.is_some() || spacing_after.is_some() || indent_left.is_some() {
            self.start("w:pPr")?;
            if let Some(style) = style_id {
                self.empty("w:pStyle", &[("w:val", style)])?;
            }
            if let Some(after) = spacing_after {
                self.empty("w:spacing", &[("w:after", after)])?;
            }
            if let Some(left) = indent_left {
                self.empty("w:ind", &[("w:left", left)])?;
            }
            self.end("w:pPr")?;
        }

        for run in runs {
            self.write_run(run)?;
        }

        self.end("w:p")
    }

    /// Write one run; embedded newlines become line breaks.
    fn write_run(&mut self, run: &TextRun) -> Result<(), ExportError> {
        self.start("w:r")?;

        if run.bold {
            self.start("w:rPr")?;
            self.empty("w:b", &[])?;
            self.end("w:rPr")?;
        }

        if run.line_break {
            self.empty("w:br", &[])?;
        }

        let text = xml_safe(&run.text);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.empty("w:br", &[])?;
            }
            let mut t = BytesStart::new("w:t");
            t.push_attribute(("xml:space", "preserve"));
            self.write(Event::Start(t))?;
            self.write(Event::Text(BytesText::new(line)))?;
            self.end("w:t")?;
        }

        self.end("w:r")
    }

    fn write_row(&mut self, cells: &[&str], header: bool, width: &str) -> Result<(), ExportError> {
        self.start("w:tr")?;

        if header {
            self.start("w:trPr")?;
            self.empty("w:tblHeader", &[])?;
            self.end("w:trPr")?;
        }

        for cell in cells {
            self.start("w:tc")?;
            self.start("w:tcPr")?;
            self.empty("w:tcW", &[("w:w", width), ("w:type", "dxa")])?;
            self.end("w:tcPr")?;

            let run = if header {
                TextRun::bold(*cell)
            } else {
                TextRun::plain(*cell)
            };
            self.write_paragraph(None, None, None, &[run])?;

            self.end("w:tc")?;
        }

        self.end("w:tr")
    }

    fn write_section_properties(&mut self) -> Result<(), ExportError> {
        self.start("w:sectPr")?;
        self.empty("w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }
}

impl DocumentBuilder for DocxBuilder {
    fn title(&mut self, text: &str) -> Result<(), ExportError> {
        self.write_paragraph(Some("Title"), None, None, &[TextRun::plain(text)])
    }

    fn heading(&mut self, text: &str) -> Result<(), ExportError> {
        self.write_paragraph(Some("Heading1"), Some("400"), None, &[TextRun::plain(text)])
    }

    fn paragraph(&mut self, style: ParagraphStyle, runs: &[TextRun]) -> Result<(), ExportError> {
        match style {
            ParagraphStyle::Normal => self.write_paragraph(None, None, None, runs),
            ParagraphStyle::Spaced => self.write_paragraph(None, Some("200"), None, runs),
            ParagraphStyle::Indented => self.write_paragraph(None, Some("120"), Some("720"), runs),
        }
    }

    fn table(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<(), ExportError> {
        let columns = header.len().max(1) as u32;
        let column_width = (TEXT_WIDTH_TWIPS / columns).to_string();

        self.start("w:tbl")?;

        self.start("w:tblPr")?;
        self.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        self.empty("w:tblLook", &[("w:val", "04A0")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid")?;
        for _ in 0..columns {
            self.empty("w:gridCol", &[("w:w", column_width.as_str())])?;
        }
        self.end("w:tblGrid")?;

        self.write_row(header, true, &column_width)?;
        for row in rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.write_row(&cells, false, &column_width)?;
        }

        self.end("w:tbl")?;

        // A table directly before sectPr or another table needs a separating paragraph.
        self.write_paragraph(None, None, None, &[])
    }

    fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        self.write_section_properties()?;
        self.end("w:body")?;
        self.end("w:document")?;

        let document = self.writer.into_inner().into_inner();
        package(&document)
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default())
}

/// Assemble the zip package around the generated document part.
fn package(document: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS.as_bytes()),
        ("word/styles.xml", STYLES.as_bytes()),
        ("word/document.xml", document),
    ];

    for (name, content) in parts {
        zip.start_file(name, entry_options())
            .map_err(|e| ExportError::ArchiveError(e.to_string()))?;
        zip.write_all(content)?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ExportError::ArchiveError(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Drop characters XML 1.0 cannot carry.
fn xml_safe(text: &str) -> Cow<'_, str> {
    let invalid = |c: char| c.is_control() && !matches!(c, '\t' | '\n');
    if text.chars().any(invalid) {
        Cow::Owned(text.chars().filter(|c| !invalid(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}
