//! Plain text passthrough

use super::{MediaType, TextExtractor};
use crate::error::{Error, Result};

/// Verbatim UTF-8 decoder for `text/plain`
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::extraction(MediaType::PlainText.as_str(), e.to_string()))
    }
}
