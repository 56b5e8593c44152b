//! OOXML word-processing document extraction

use std::io::{Cursor, Read};

use quick_xml::events::Event;

use super::{MediaType, TextExtractor};
use crate::error::{Error, Result};

/// Raw-text extractor for OOXML word-processing documents
///
/// Reads `word/document.xml` out of the zip container and collects the
/// `<w:t>` text runs, one line per paragraph. Formatting is discarded.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let media_type = MediaType::Docx.as_str();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::extraction(media_type, e.to_string()))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                Error::extraction(media_type, format!("missing word/document.xml: {}", e))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| Error::extraction(media_type, e.to_string()))?;

        Ok(collect_paragraphs(&xml))
    }
}

/// Concatenate the `<w:t>` runs of each `<w:p>`, one newline-terminated
/// line per paragraph.
fn collect_paragraphs(xml: &str) -> String {
    let mut reader = quick_xml::Reader::from_reader(xml.as_bytes());
    let mut out = String::new();
    let mut current = String::new();
    let mut in_t = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:t" => in_t = true,
                b"w:p" => current.clear(),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_t = false,
                b"w:p" => {
                    out.push_str(&current);
                    out.push('\n');
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_t {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    out
}
