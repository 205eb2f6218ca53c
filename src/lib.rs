//! # md2html
//!
//! Convert a constrained subset of Markdown into embeddable HTML fragments.
//!
//! ## Why this crate?
//!
//! Full CommonMark engines are the right tool for rendering arbitrary
//! documents, but they come with a large surface: reference links, HTML
//! passthrough, nested emphasis resolution. Content-publishing pipelines that
//! control their own Markdown often want the opposite trade-off — a small,
//! predictable, single-pass renderer that is *total* (any input produces
//! output, malformed syntax degrades to plain paragraphs) and emits a bare
//! fragment ready to drop into a page template.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Images  rewrite relative image paths against a base URL
//!  ├─ 2. Blocks  line state machine → paragraphs, headings, lists, fences
//!  └─ 3. Inline  span regexes → strong / em / code / links / images / del
//! ```
//!
//! Supported syntax: `#`–`######` headings (with optional `{#anchor}`),
//! paragraphs with soft-wrap collapsing, fenced code blocks with a language
//! class, nested ordered/unordered/task lists with per-depth
//! `list-style-type` cycling, bold, italic, inline code, links, images, and
//! strikethrough. Not supported (by design): blockquotes, tables, reference
//! links, footnotes, raw HTML passthrough, nested emphasis.
//!
//! ## Quick Start
//!
//! ```rust
//! use md2html::{render, RenderConfig};
//!
//! let config = RenderConfig::builder()
//!     .image_base_url("https://cdn.example.com/img")
//!     .build();
//! let html = render("# Title\n\nThis is **bold** text.", &config);
//! assert_eq!(html, "<h1>Title</h1>\n<p>This is <strong>bold</strong> text.</p>\n");
//! ```
//!
//! The output is always a fragment — no `<html>`/`<body>` wrapper — and the
//! renderer is a pure function: no shared mutable state, safe to call from
//! many threads at once.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2html = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::Md2HtmlError;
pub use output::{RenderOutput, RenderStats};
pub use render::{render, render_file, render_to_file, render_with_stats};
