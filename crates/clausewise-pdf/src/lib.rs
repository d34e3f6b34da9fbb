//! Clausewise PDF text extraction
//!
//! Implements the [`TextExtractor`](clausewise_domain::TextExtractor) trait on
//! top of `lopdf`. Pages are read in document order and their text is
//! concatenated without separators.
//!
//! # Examples
//!
//! ```no_run
//! use clausewise_domain::TextExtractor;
//! use clausewise_pdf::PdfTextExtractor;
//! use std::path::Path;
//!
//! let contract = PdfTextExtractor::new()
//!     .extract(Path::new("msa.pdf"))
//!     .unwrap();
//! println!("{} pages, {} chars", contract.page_count(), contract.char_count());
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;

pub use error::PdfError;
pub use extractor::PdfTextExtractor;
