//! End-to-end rendering tests for md2html.
//!
//! Exercises the public API the way an embedding pipeline would: whole
//! documents in, whole HTML fragments out, plus the file-based collaborators
//! on real temp files.

use md2html::{render, render_file, render_to_file, Md2HtmlError, RenderConfig};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn config_with_base() -> RenderConfig {
    RenderConfig::builder()
        .image_base_url("https://example.com/images")
        .build()
}

/// Render with the image base configured, as the documentation pipeline does.
fn render_doc(input: &str) -> String {
    render(input, &config_with_base())
}

// ── Whole-document scenarios ─────────────────────────────────────────────────

#[test]
fn title_and_formatted_paragraph() {
    assert_eq!(
        render_doc("# Title\n\nThis is **bold** text and this is *italic* text."),
        "<h1>Title</h1>\n<p>This is <strong>bold</strong> text and this is <em>italic</em> text.</p>\n"
    );
}

#[test]
fn basic_heading() {
    assert_eq!(render_doc("# Heading\n"), "<h1>Heading</h1>\n");
}

#[test]
fn subheading() {
    assert_eq!(render_doc("## Subheading\n"), "<h2>Subheading</h2>\n");
}

#[test]
fn unordered_list() {
    assert_eq!(
        render_doc("- Item 1\n- Item 2\n"),
        "<ul style=\"list-style-type: circle\">\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>\n"
    );
}

#[test]
fn paragraph_with_formatting() {
    assert_eq!(
        render_doc("This is **bold** text and this is *italic* text.\n"),
        "<p>This is <strong>bold</strong> text and this is <em>italic</em> text.</p>\n"
    );
}

#[test]
fn relative_image_is_rebased() {
    assert_eq!(
        render_doc("![alt text](/image.png)\n"),
        "<p><img src=\"https://example.com/images/image.png\" alt=\"alt text\"></p>\n"
    );
}

#[test]
fn absolute_image_is_untouched() {
    assert_eq!(
        render_doc("![alt text](https://other.com/image.png)\n"),
        "<p><img src=\"https://other.com/image.png\" alt=\"alt text\"></p>\n"
    );
}

#[test]
fn no_markdown_syntax_is_one_escaped_paragraph() {
    assert_eq!(
        render_doc("plain text with <angle> & ampersand\n"),
        "<p>plain text with &lt;angle&gt; &amp; ampersand</p>\n"
    );
}

#[test]
fn mixed_document() {
    let input = "\
# Guide {#guide}

Intro paragraph with a [link](https://example.org) and `code`.

- first
- [x] second, done
  1. nested
- last

```sh
echo hi
```
";
    let expected = "\
<h1 id=\"guide\">Guide</h1>\n\
<p>Intro paragraph with a <a href=\"https://example.org\">link</a> and <code>code</code>.</p>\n\
<ul style=\"list-style-type: circle\">\n\
<li>first</li>\n\
<li><input type=\"checkbox\" disabled checked> second, done</li>\n\
<ol style=\"list-style-type: lower-alpha\">\n\
<li>nested</li>\n\
</ol>\n\
<li>last</li>\n\
</ul>\n\
<pre><code class=\"language-sh\">\n\
echo hi\n\
</code></pre>\n";
    assert_eq!(render_doc(input), expected);
}

#[test]
fn list_nesting_depth_matches_tag_counts() {
    let html = render_doc("- a\n  - b\n    - c\n");
    assert_eq!(html.matches("<ul").count(), 3);
    assert_eq!(html.matches("</ul>").count(), 3);
}

#[test]
fn rendering_html_output_as_markdown_escapes_it() {
    // The output is HTML, not Markdown: feeding it back in must produce an
    // escaped echo, never un-escaped markup.
    let first = render_doc("This is **bold** text.\n");
    let second = render_doc(&first);
    assert!(second.contains("&lt;strong&gt;"), "got: {second}");
    assert!(!second[3..].contains("<strong>"), "got: {second}");
}

#[test]
fn empty_and_whitespace_inputs_render_nothing() {
    assert_eq!(render_doc(""), "");
    assert_eq!(render_doc("\n"), "");
    assert_eq!(render_doc("   \n\n"), "");
}

// ── File collaborators ───────────────────────────────────────────────────────

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.md");
    let output_path = dir.path().join("output.html");

    let markdown = "# Title\n\nThis is **bold** text and this is *italic* text.";
    let expected =
        "<h1>Title</h1>\n<p>This is <strong>bold</strong> text and this is <em>italic</em> text.</p>\n";
    std::fs::write(&input_path, markdown).unwrap();

    let stats = render_to_file(&input_path, &output_path, &config_with_base()).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, expected);
    assert_eq!(stats.bytes_in, markdown.len());
    assert_eq!(stats.bytes_out, expected.len());
}

#[test]
fn render_file_returns_html_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    std::fs::write(&input_path, "- a\n- b\n").unwrap();

    let output = render_file(&input_path, &RenderConfig::default()).unwrap();
    assert!(output.html.starts_with("<ul"));
    assert_eq!(output.stats.lines, 3);
    assert_eq!(output.stats.bytes_out, output.html.len());
}

#[test]
fn missing_input_is_a_file_not_found_error() {
    let err = render_file("no/such/file.md", &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Md2HtmlError::FileNotFound { .. }), "got: {err}");
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    std::fs::write(&input_path, "# hi\n").unwrap();

    // Destination directory does not exist.
    let output_path = dir.path().join("missing-dir").join("out.html");
    let err = render_to_file(&input_path, &output_path, &RenderConfig::default()).unwrap_err();
    assert!(
        matches!(err, Md2HtmlError::OutputWriteFailed { .. }),
        "got: {err}"
    );
}
