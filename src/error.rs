//! Error types for the md2html library.
//!
//! The rendering core is total: [`crate::render`] accepts any string and
//! always produces HTML — malformed Markdown degrades to paragraph text
//! rather than failing. The only failures in the system are I/O failures in
//! the file-reading and file-writing collaborators, captured here and
//! propagated once (no retries, no partial-output recovery).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2html library.
#[derive(Debug, Error)]
pub enum Md2HtmlError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file was read but its contents are not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8: {detail}")]
    InvalidUtf8 { path: PathBuf, detail: String },

    /// Reading the input file failed for another reason.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
