//! Trailer dictionary tokenizer
//!
//! Turns the raw `<< ... >>` text of a trailer dictionary into a map from
//! name keys to unparsed value tokens. Values stay raw text: a name, a
//! number, or an indirect reference `N G R`. This tokenizer is total; its
//! callers only test key presence, so malformed input degrades to an empty
//! or partial map instead of an error.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    // A name key (/ plus alphanumerics), then a value token running up to the
    // next /, >, or whitespace. An indirect reference "N G R" is the one value
    // with embedded whitespace, so an optional "\s+\d+\s+R" tail is allowed.
    static ref KEY_VALUE_RE: Regex =
        Regex::new(r"/([A-Za-z0-9]+)\s*([^\s/>]*(?:\s+\d+\s+R)?)").unwrap();
}

/// Parse bracketed dictionary text into a key/value map.
///
/// A single leading `<<` and trailing `>>` are stripped if present (their
/// absence is tolerated). Keys are stored without the leading `/`; when a key
/// repeats, the last occurrence wins. Pairs whose value trims to empty are
/// skipped.
pub fn parse_dictionary(text: &str) -> HashMap<String, String> {
    let inner = text.trim();
    let inner = inner.strip_prefix("<<").unwrap_or(inner);
    let inner = inner.strip_suffix(">>").unwrap_or(inner);

    let mut entries = HashMap::new();
    for capture in KEY_VALUE_RE.captures_iter(inner) {
        let value = capture[2].trim();
        if !value.is_empty() {
            entries.insert(capture[1].to_string(), value.to_string());
        }
    }
    entries
}
