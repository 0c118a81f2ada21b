//! Trailer dictionary locator
//!
//! Finds the `trailer` keyword near the cross-reference offset and extracts
//! the `<< ... >>` dictionary span that follows it (ISO 32000-1 Section
//! 7.5.5). The span ends at the first `>>` after the opening marker; nested
//! dictionaries inside the trailer are out of scope for this scanner and may
//! truncate the span early.

use super::{ScanError, ScanResult};

/// Number of bytes read from the cross-reference offset when looking for the
/// trailer. Assumes the trailer dictionary is short and near the offset;
/// larger or farther trailers are out of scope.
const TRAILER_WINDOW_SIZE: usize = 2048;

const TRAILER_KEYWORD: &str = "trailer";
const DICT_OPEN: &str = "<<";
const DICT_CLOSE: &str = ">>";

/// Extract the trailer dictionary text at the given cross-reference offset.
///
/// The offset is validated here rather than trusted: it is clamped into the
/// buffer, and a window of up to 2048 bytes (shorter at end of file) is
/// decoded leniently and scanned. Returns the span from `<<` through the
/// first following `>>`, both inclusive.
pub fn find_trailer_dict(buffer: &[u8], offset: usize) -> ScanResult<String> {
    let start = offset.min(buffer.len());
    let end = buffer.len().min(start + TRAILER_WINDOW_SIZE);
    let text = String::from_utf8_lossy(&buffer[start..end]);

    let keyword_pos = text
        .find(TRAILER_KEYWORD)
        .ok_or(ScanError::MissingTrailerKeyword)?;

    let open = text[keyword_pos..]
        .find(DICT_OPEN)
        .map(|i| keyword_pos + i)
        .ok_or(ScanError::MissingDictionaryStart)?;

    let close = text[open + DICT_OPEN.len()..]
        .find(DICT_CLOSE)
        .map(|i| open + DICT_OPEN.len() + i)
        .ok_or(ScanError::MissingDictionaryEnd)?;

    Ok(text[open..close + DICT_CLOSE.len()].to_string())
}
