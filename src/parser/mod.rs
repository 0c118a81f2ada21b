//! Minimal PDF structural scanner
//!
//! This module implements just enough of ISO 32000-1 Section 7.5 (file
//! structure) to locate the trailer dictionary of a PDF file: the `startxref`
//! offset at the file tail, the `trailer` keyword, and the `<< ... >>`
//! dictionary that follows it. It never builds an object model; the trailer
//! entries are kept as raw text so callers can test for the presence of keys
//! such as `Encrypt`.

pub mod dictionary;
pub mod trailer;
pub mod xref;

use std::collections::HashMap;

pub use self::dictionary::parse_dictionary;
pub use self::trailer::find_trailer_dict;
pub use self::xref::find_xref_offset;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Structural scanner errors
///
/// Each variant names a specific file-structure expectation that was violated
/// during low-level scanning. All are recoverable; the top-level check in
/// [`crate::detect`] collapses every one of them to a `false` verdict.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing %%EOF marker in file tail")]
    MissingEofMarker,

    #[error("missing startxref keyword before %%EOF")]
    MissingStartxrefKeyword,

    #[error("no cross-reference offset after startxref")]
    MissingXrefOffset,

    #[error("cross-reference offset out of range")]
    InvalidXrefOffset,

    #[error("missing trailer keyword at cross-reference offset")]
    MissingTrailerKeyword,

    #[error("missing << after trailer keyword")]
    MissingDictionaryStart,

    #[error("missing >> closing the trailer dictionary")]
    MissingDictionaryEnd,
}

/// Scan a complete PDF buffer and return its trailer entries as raw text.
///
/// Runs the three stages in sequence: locate the xref offset from the file
/// tail, extract the trailer dictionary span at that offset, and tokenize it
/// into a key/value map. Keys are stored without the leading `/`, values are
/// kept unparsed (a name, a number, or an indirect reference `N G R`).
pub fn scan_trailer(buffer: &[u8]) -> ScanResult<HashMap<String, String>> {
    let offset = xref::find_xref_offset(buffer)?;
    let dict_text = trailer::find_trailer_dict(buffer, offset)?;
    Ok(dictionary::parse_dictionary(&dict_text))
}
