//! # pdf-sentry
//!
//! Detects whether a PDF document is password-protected, in pure Rust with
//! zero external PDF dependencies.
//!
//! The crate implements a minimal structural scanner over ISO 32000-1 file
//! syntax: it locates the `startxref` offset in the file tail, extracts the
//! trailer dictionary at that offset, and tests it for an `/Encrypt` entry.
//! It never decrypts anything and never validates passwords; it only answers
//! "would a viewer prompt for a password here?".
//!
//! ## Quick Start
//!
//! ```rust
//! use pdf_sentry::is_protected;
//!
//! let pdf = b"%PDF-1.4\nxref\n0 4\ntrailer\n<< /Size 4 /Root 1 0 R /Encrypt 3 0 R >>\nstartxref\n9\n%%EOF";
//! assert!(is_protected(pdf));
//! ```
//!
//! Checking a file on disk:
//!
//! ```rust,no_run
//! use pdf_sentry::is_protected_file;
//!
//! if is_protected_file("document.pdf") {
//!     println!("password required");
//! }
//! ```
//!
//! ## Error Policy
//!
//! The top-level checks never fail: malformed, truncated, or unrecognized
//! documents are reported as not protected. Callers needing to distinguish
//! "malformed" from "definitely unprotected" can use
//! [`parser::scan_trailer`], which surfaces the specific structural failure
//! ([`parser::ScanError`]) instead of collapsing it.
//!
//! ## Modules
//!
//! - [`parser`] - Low-level structural scanning (xref offset, trailer span,
//!   dictionary tokenization)
//! - [`detect`] - Top-level protection checks and the password stub

pub mod detect;
pub mod parser;

pub use detect::{check_password, is_protected, is_protected_file};
pub use parser::{ScanError, ScanResult};

/// Current version of pdf-sentry
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
