//! Password-protection detection
//!
//! The top-level checks. Policy: malformed, truncated, or unrecognized
//! documents are reported as not protected, never as an error. Callers that
//! need to distinguish "malformed PDF" from "definitely unprotected" should
//! use [`crate::parser::scan_trailer`], which surfaces the specific failure
//! kind instead.

use std::path::Path;
use tracing::{debug, warn};

use crate::parser;

/// Trailer key whose presence marks an encrypted document.
const ENCRYPT_KEY: &str = "Encrypt";

/// Check whether a PDF held in memory is password-protected.
///
/// Returns `true` iff the trailer dictionary contains an `/Encrypt` entry.
/// Any structural failure while scanning collapses to `false`; the failure
/// kind is emitted as a debug-level diagnostic only.
pub fn is_protected(buffer: &[u8]) -> bool {
    match parser::scan_trailer(buffer) {
        Ok(entries) => entries.contains_key(ENCRYPT_KEY),
        Err(err) => {
            debug!(error = %err, "treating document as unprotected");
            false
        }
    }
}

/// Check whether the PDF at `path` is password-protected.
///
/// Reads the file fully into memory and delegates to [`is_protected`]. A
/// read failure (not found, permission denied, I/O error) is reported as
/// `false` through the same conservative policy, distinguishable only via
/// the emitted warning.
pub fn is_protected_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(buffer) => is_protected(&buffer),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read file");
            false
        }
    }
}

/// Validate a user password against a protected document.
///
/// Interface placeholder: standard security handler validation (revision
/// 2/3/4 RC4/AES key derivation against `/O`, `/U`, `/R`, `/P`) is not
/// implemented, so no password can be confirmed. Returns `false` for
/// unprotected documents and `false` for protected ones.
pub fn check_password(buffer: &[u8], _password: &str) -> bool {
    if !is_protected(buffer) {
        return false;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal single-section PDF with the given trailer dictionary.
    fn minimal_pdf(trailer_dict: &str) -> Vec<u8> {
        let mut pdf = Vec::new();
        pdf.extend_from_slice(b"%PDF-1.4\n");
        let xref_offset = pdf.len();
        pdf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \ntrailer\n");
        pdf.extend_from_slice(trailer_dict.as_bytes());
        pdf.extend_from_slice(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes());
        pdf
    }

    #[test]
    fn test_unencrypted_document() {
        let pdf = minimal_pdf("<< /Size 4 /Root 1 0 R >>");
        assert!(!is_protected(&pdf));
    }

    #[test]
    fn test_encrypted_document() {
        let pdf = minimal_pdf("<< /Size 4 /Root 1 0 R /Encrypt 3 0 R >>");
        assert!(is_protected(&pdf));
    }

    #[test]
    fn test_truncated_buffer() {
        assert!(!is_protected(b"%PDF-1.4\n"));
        assert!(!is_protected(&[0u8; 10]));
        assert!(!is_protected(b""));
    }

    #[test]
    fn test_buffer_without_tail_markers() {
        assert!(!is_protected(b"%PDF-1.4\nlots of content but no tail"));
    }

    #[test]
    fn test_check_password_unprotected() {
        let pdf = minimal_pdf("<< /Size 4 /Root 1 0 R >>");
        assert!(!check_password(&pdf, "secret"));
    }

    #[test]
    fn test_check_password_protected_stub() {
        let pdf = minimal_pdf("<< /Size 4 /Root 1 0 R /Encrypt 3 0 R >>");
        assert!(!check_password(&pdf, "secret"));
        assert!(!check_password(&pdf, ""));
    }

    #[test]
    fn test_missing_file_reports_unprotected() {
        assert!(!is_protected_file("/no/such/file.pdf"));
    }
}
