//! Output types for a completed render.

use serde::{Deserialize, Serialize};

/// A completed render: the HTML fragment plus run statistics.
///
/// The HTML is a fragment — no `<html>`/`<body>` wrapper — ready to embed in
/// a page template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// The rendered HTML fragment.
    pub html: String,
    /// Statistics for the render call.
    pub stats: RenderStats,
}

/// Statistics for one render call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderStats {
    /// Bytes of Markdown consumed.
    pub bytes_in: usize,
    /// Bytes of HTML produced.
    pub bytes_out: usize,
    /// Number of source lines scanned.
    pub lines: usize,
    /// Wall-clock duration of the render in milliseconds.
    pub duration_ms: u64,
}
