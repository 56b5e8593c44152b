//! Document-to-text extraction
//!
//! Each supported format is an isolated decoder registered under its
//! media type. Dispatch goes by the declared type only — bytes are never
//! sniffed — so adding a format means registering one new decoder.

mod docx;
mod pdf;
mod text;
mod xlsx;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;
pub use xlsx::XlsxExtractor;

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Media types with a built-in decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `text/plain`
    PlainText,
    /// `application/pdf`
    Pdf,
    /// OOXML word-processing document
    Docx,
    /// OOXML spreadsheet
    Xlsx,
}

impl MediaType {
    /// Parse a declared media type string, ignoring parameters such as
    /// `; charset=utf-8`
    pub fn parse(declared: &str) -> Option<Self> {
        let essence = declared.split(';').next().unwrap_or("").trim();
        match essence {
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            _ => None,
        }
    }

    /// Canonical media type string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

/// A single-format text decoder
pub trait TextExtractor: Send + Sync {
    /// Decode one document's bytes into plain text
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Registry dispatching a declared media type to its decoder
pub struct ExtractorRegistry {
    extractors: HashMap<MediaType, Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registry with all built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MediaType::PlainText, Box::new(PlainTextExtractor));
        registry.register(MediaType::Pdf, Box::new(PdfExtractor));
        registry.register(MediaType::Docx, Box::new(DocxExtractor));
        registry.register(MediaType::Xlsx, Box::new(XlsxExtractor));
        registry
    }

    /// Register a decoder for a media type, replacing any previous one
    pub fn register(&mut self, media_type: MediaType, extractor: Box<dyn TextExtractor>) {
        self.extractors.insert(media_type, extractor);
    }

    /// Extract text from `bytes` according to the declared media type
    pub fn extract(&self, bytes: &[u8], declared_type: &str) -> Result<String> {
        let media_type = MediaType::parse(declared_type)
            .ok_or_else(|| Error::UnsupportedMediaType(declared_type.to_string()))?;

        let extractor = self
            .extractors
            .get(&media_type)
            .ok_or_else(|| Error::UnsupportedMediaType(declared_type.to_string()))?;

        extractor.extract(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
