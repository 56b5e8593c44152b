//! PDF text-layer extraction

use super::{MediaType, TextExtractor};
use crate::error::{Error, Result};

/// Text-layer extractor for `application/pdf`
///
/// Runs pdf-extract over the whole document; recovered text comes back
/// in page order as one string.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract can panic on malformed input; turn that into a
        // recoverable parse failure instead of poisoning the worker.
        let bytes = bytes.to_vec();
        let result =
            std::panic::catch_unwind(move || pdf_extract::extract_text_from_mem(&bytes));

        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(Error::extraction(MediaType::Pdf.as_str(), e.to_string())),
            Err(_) => Err(Error::extraction(
                MediaType::Pdf.as_str(),
                "PDF parser panicked on malformed input",
            )),
        }
    }
}
