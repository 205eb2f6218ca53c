//! Rendering entry points.
//!
//! [`render`] is the core: a pure, total function from Markdown text and
//! config to an HTML fragment. The file-based variants ([`render_file`],
//! [`render_to_file`]) are thin collaborators that add UTF-8 decoding, error
//! mapping, and write-out around that core — they contain no rendering logic
//! of their own.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::error::Md2HtmlError;
use crate::output::{RenderOutput, RenderStats};
use crate::pipeline::{blocks, images};

/// Convert Markdown text to an HTML fragment.
///
/// Total over all string inputs: malformed syntax degrades to literal
/// paragraph text, unmatched delimiters stay literal, and the empty string
/// renders to the empty string. Never returns an error.
///
/// # Example
/// ```rust
/// use md2html::{render, RenderConfig};
///
/// let html = render("# Title\n\nHello **world**.", &RenderConfig::default());
/// assert_eq!(html, "<h1>Title</h1>\n<p>Hello <strong>world</strong>.</p>\n");
/// ```
pub fn render(input: &str, config: &RenderConfig) -> String {
    match config.image_base() {
        Some(base) => blocks::process_blocks(&images::rewrite_image_urls(input, base)),
        None => blocks::process_blocks(input),
    }
}

/// Convert Markdown text to an HTML fragment, with run statistics.
pub fn render_with_stats(input: &str, config: &RenderConfig) -> RenderOutput {
    let start = Instant::now();
    let html = render(input, config);
    let stats = RenderStats {
        bytes_in: input.len(),
        bytes_out: html.len(),
        lines: input.split('\n').count(),
        duration_ms: start.elapsed().as_millis() as u64,
    };
    debug!(
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        lines = stats.lines,
        "rendered markdown"
    );
    RenderOutput { html, stats }
}

/// Read a Markdown file and render it to an HTML fragment.
///
/// # Errors
/// Returns [`Md2HtmlError`] when the file is missing, unreadable, or not
/// valid UTF-8. Rendering itself cannot fail.
pub fn render_file(
    path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderOutput, Md2HtmlError> {
    let path = path.as_ref();
    let input = read_markdown(path)?;
    info!(path = %path.display(), bytes = input.len(), "read markdown input");
    Ok(render_with_stats(&input, config))
}

/// Read a Markdown file, render it, and write the HTML byte-for-byte to
/// `output_path`.
///
/// # Errors
/// Returns [`Md2HtmlError`] for read failures (missing file, permissions,
/// invalid UTF-8) and write failures. A write failure may leave a partially
/// written output file; no cleanup is attempted beyond what the platform
/// guarantees.
pub fn render_to_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderStats, Md2HtmlError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    let output = render_file(input_path, config)?;
    std::fs::write(output_path, output.html.as_bytes()).map_err(|source| {
        Md2HtmlError::OutputWriteFailed {
            path: output_path.to_path_buf(),
            source,
        }
    })?;
    info!(
        path = %output_path.display(),
        bytes = output.stats.bytes_out,
        duration_ms = output.stats.duration_ms,
        "wrote html output"
    );
    Ok(output.stats)
}

/// Read `path` as UTF-8 text, mapping I/O failures to domain errors.
fn read_markdown(path: &Path) -> Result<String, Md2HtmlError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Md2HtmlError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Md2HtmlError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Md2HtmlError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })?;
    String::from_utf8(bytes).map_err(|e| Md2HtmlError::InvalidUtf8 {
        path: path.to_path_buf(),
        detail: e.utf8_error().to_string(),
    })
}
