//! Contract text extracted from a source document

use std::fmt;

/// Full text of one contract, pages concatenated in order.
///
/// Created once when the document is loaded and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractText {
    text: String,
    page_count: usize,
}

impl ContractText {
    /// Wrap already-extracted text
    pub fn new(text: impl Into<String>, page_count: usize) -> Self {
        Self {
            text: text.into(),
            page_count,
        }
    }

    /// Build from per-page text, preserving page order with no separators
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut page_count = 0;
        for page in pages {
            text.push_str(page.as_ref());
            page_count += 1;
        }
        Self { text, page_count }
    }

    /// The contract text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when no text was extracted
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of pages the text was assembled from
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl AsRef<str> for ContractText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ContractText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
