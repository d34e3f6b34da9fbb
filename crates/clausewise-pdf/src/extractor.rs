//! lopdf-backed text extractor

use crate::error::PdfError;
use clausewise_domain::{ContractText, TextExtractor};
use lopdf::Document;
use std::path::Path;
use tracing::{debug, info, warn};

/// Extracts the text of every page of a PDF, in page order
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract text from PDF bytes already in memory
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<ContractText, PdfError> {
        let document = Document::load_mem(bytes)?;
        self.extract_document(&document)
    }

    fn extract_document(&self, document: &Document) -> Result<ContractText, PdfError> {
        if document.trailer.get(b"Encrypt").is_ok() {
            return Err(PdfError::Encrypted);
        }

        // BTreeMap keyed by 1-based page number, so iteration is page order
        let pages = document.get_pages();
        let page_count = pages.len();
        let mut page_texts = Vec::with_capacity(page_count);

        for &page_number in pages.keys() {
            match document.extract_text(&[page_number]) {
                Ok(text) => {
                    debug!("Page {}: {} chars", page_number, text.len());
                    page_texts.push(text);
                }
                Err(e) => {
                    warn!("Skipping page {}: {}", page_number, e);
                    page_texts.push(String::new());
                }
            }
        }

        let contract = ContractText::from_pages(page_texts);
        if contract.is_empty() {
            return Err(PdfError::NoText(page_count));
        }

        info!(
            "Extracted {} chars from {} page(s)",
            contract.char_count(),
            contract.page_count()
        );
        Ok(contract)
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = PdfError;

    fn extract(&self, path: &Path) -> Result<ContractText, Self::Error> {
        if !path.is_file() {
            return Err(PdfError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        self.extract_from_bytes(&bytes)
    }
}
