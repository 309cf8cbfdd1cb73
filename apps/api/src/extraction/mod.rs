//! Plain-text extraction from uploaded résumé files.
//!
//! Best-effort: PDF via `pdf-extract`, DOCX by reading the paragraph runs of
//! `word/document.xml`, anything else decoded as UTF-8 (invalid sequences replaced).
//! These calls are CPU-bound; run them on the blocking pool.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::errors::AppError;

const DOCX_DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    PlainText,
}

impl ResumeFormat {
    /// Picks the extractor from the declared file extension, ignoring case.
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => ResumeFormat::Pdf,
            "docx" => ResumeFormat::Docx,
            _ => ResumeFormat::PlainText,
        }
    }
}

/// Extracts plain text from an uploaded file.
pub fn extract_text(bytes: &[u8], format: ResumeFormat) -> Result<String, AppError> {
    let text = match format {
        ResumeFormat::Pdf => extract_pdf(bytes)?,
        ResumeFormat::Docx => extract_docx(bytes)?,
        ResumeFormat::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };
    debug!("Extracted {} chars from {:?} upload", text.chars().count(), format);
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    // pdf-extract panics on some malformed documents instead of returning an error.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(format!("invalid PDF: {e}"))),
        Err(_) => Err(AppError::Extraction("invalid PDF: parser aborted".to_string())),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("invalid DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_DOCUMENT_PART)
        .map_err(|e| AppError::Extraction(format!("DOCX has no document body: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("unreadable DOCX body: {e}")))?;

    document_xml_to_text(&xml)
}

/// Collects `<w:t>` runs, one line per `<w:p>` paragraph.
fn document_xml_to_text(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => current.push('\t'),
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| AppError::Extraction(format!("malformed DOCX text: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Extraction(format!(
                    "malformed DOCX XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs.join("\n"))
}
