//! Cross-reference offset scanner
//!
//! Locates the `startxref` offset a conforming writer appends at the end of
//! the file (`startxref\n<offset>\n%%EOF`, ISO 32000-1 Section 7.5.5). Only a
//! bounded tail of the file is examined, so the work per call is independent
//! of document size.

use super::{ScanError, ScanResult};

/// Number of bytes from the end of the file searched for the EOF markers.
/// Enough for EOL variants + `startxref` + offset + `%%EOF`.
const TAIL_WINDOW_SIZE: usize = 1024;

const EOF_MARKER: &str = "%%EOF";
const STARTXREF_KEYWORD: &str = "startxref";

/// Find the byte offset of the cross-reference section from the file tail.
///
/// Scans the last `min(1024, len)` bytes for the last `%%EOF`, the last
/// `startxref` before it, and the decimal offset between the two. The offset
/// is relative to the start of the whole buffer.
///
/// Bytes that are not valid UTF-8 are decoded leniently and treated as
/// non-matching filler; they never abort the scan.
pub fn find_xref_offset(buffer: &[u8]) -> ScanResult<usize> {
    let tail = tail_window(buffer);
    let text = String::from_utf8_lossy(tail);

    let eof_pos = text.rfind(EOF_MARKER).ok_or(ScanError::MissingEofMarker)?;

    let startxref_pos = text[..eof_pos]
        .rfind(STARTXREF_KEYWORD)
        .ok_or(ScanError::MissingStartxrefKeyword)?;

    let between = text[startxref_pos + STARTXREF_KEYWORD.len()..eof_pos].trim();
    parse_offset_digits(between)
}

/// The trailing slice of the buffer likely to contain the EOF markers.
fn tail_window(buffer: &[u8]) -> &[u8] {
    let window = buffer.len().min(TAIL_WINDOW_SIZE);
    &buffer[buffer.len() - window..]
}

/// Extract the first maximal run of decimal digits and parse it.
fn parse_offset_digits(text: &str) -> ScanResult<usize> {
    let start = text
        .find(|c: char| c.is_ascii_digit())
        .ok_or(ScanError::MissingXrefOffset)?;
    let run = &text[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());

    run[..end]
        .parse::<usize>()
        .map_err(|_| ScanError::InvalidXrefOffset)
}
