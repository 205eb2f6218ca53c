//! Block-level line processing: the second pipeline stage.
//!
//! A single forward scan classifies each input line into a block type and
//! emits the HTML skeleton, delegating block text to [`super::inline`]. The
//! scan keeps three pieces of state: an open-paragraph flag, an open-code-block
//! flag (plus the fence's language), and a stack of open list levels. The only
//! lookahead is one line, used to decide when a list or sublist ends.
//!
//! Per line, classification runs in a fixed priority order: blank line, list
//! item, code fence, code-block interior, heading, paragraph text. Anything
//! that matches no earlier rule is paragraph text, which is how malformed
//! syntax degrades without errors.

use once_cell::sync::Lazy;
use regex::Regex;

use super::escape::escape_html;
use super::inline::format_inline;

static RE_LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-*+]|\d+\.|[a-z]\.|[ivxIVX]+\.)\s+(.+)$").unwrap());
static RE_TASK_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([ xX])\]\s+(.+)$").unwrap());
static RE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+\{#([^}]+)\})?$").unwrap());

/// One open list element on the nesting stack.
///
/// `depth` values on the stack grow from bottom to top; the closing tag kind
/// must match the opening tag, so both are recorded together.
struct ListLevel {
    ordered: bool,
    depth: usize,
}

/// Mutable scanning state, scoped to a single render call.
#[derive(Default)]
struct RenderState {
    in_paragraph: bool,
    in_code_block: bool,
    code_language: String,
    list_stack: Vec<ListLevel>,
}

impl RenderState {
    fn close_paragraph(&mut self, out: &mut String) {
        if self.in_paragraph {
            out.push_str("</p>\n");
            self.in_paragraph = false;
        }
    }
}

/// Count of leading ASCII spaces; this is the list-nesting indentation.
fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// `list-style-type` value for a list opened at `depth`.
///
/// Cycles with period 3 so deeply nested levels stay visually distinct
/// without external CSS.
fn list_style(ordered: bool, depth: usize) -> &'static str {
    match (ordered, depth % 3) {
        (false, 1) => "circle",
        (false, 2) => "disc",
        (false, _) => "square",
        (true, 1) => "decimal",
        (true, 2) => "lower-alpha",
        (true, _) => "upper-roman",
    }
}

fn close_list_level(level: &ListLevel, out: &mut String) {
    out.push_str(if level.ordered { "</ol>\n" } else { "</ul>\n" });
}

/// Render the rewritten Markdown input into an HTML fragment.
pub fn process_blocks(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    let mut state = RenderState::default();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        // Blank lines end paragraphs and nothing else; list closing is the
        // lookahead's job and fences only close on a matching fence line.
        if line.is_empty() {
            state.close_paragraph(&mut out);
            continue;
        }

        if let Some(caps) = RE_LIST_ITEM.captures(line) {
            let indent = leading_spaces(raw);
            let next_line = lines.get(i + 1).copied();
            handle_list_item(&mut state, &mut out, &caps, indent, next_line);
            continue;
        }

        if line.starts_with("```") {
            toggle_code_block(&mut state, &mut out, line);
            continue;
        }

        if state.in_code_block {
            out.push_str(&escape_html(line));
            out.push('\n');
            continue;
        }

        if let Some(caps) = RE_HEADING.captures(line) {
            state.close_paragraph(&mut out);
            let level = caps[1].len();
            out.push_str(&format!("<h{level}"));
            if let Some(id) = caps.get(3) {
                out.push_str(&format!(" id=\"{}\"", id.as_str()));
            }
            out.push_str(&format!(
                ">{}</h{level}>\n",
                format_inline(&escape_html(&caps[2]))
            ));
            continue;
        }

        // Paragraph text. Consecutive lines merge into one paragraph with a
        // single joining space (soft-wrap collapsing).
        if state.in_paragraph {
            out.push(' ');
        } else {
            out.push_str("<p>");
            state.in_paragraph = true;
        }
        out.push_str(&format_inline(&escape_html(line)));
    }

    // End of input: everything still open gets closed exactly once.
    state.close_paragraph(&mut out);
    while let Some(level) = state.list_stack.pop() {
        close_list_level(&level, &mut out);
    }
    if state.in_code_block {
        out.push_str("</code></pre>\n");
    }

    out
}

fn toggle_code_block(state: &mut RenderState, out: &mut String, line: &str) {
    if state.in_code_block {
        out.push_str("</code></pre>\n");
        state.in_code_block = false;
        state.code_language.clear();
    } else {
        state.close_paragraph(out);
        state.code_language = line.strip_prefix("```").unwrap_or("").trim().to_string();
        out.push_str("<pre><code");
        if !state.code_language.is_empty() {
            out.push_str(&format!(
                " class=\"language-{}\"",
                escape_html(&state.code_language)
            ));
        }
        out.push_str(">\n");
        state.in_code_block = true;
    }
}

fn handle_list_item(
    state: &mut RenderState,
    out: &mut String,
    caps: &regex::Captures<'_>,
    indent: usize,
    next_line: Option<&str>,
) {
    state.close_paragraph(out);

    let marker = &caps[1];
    let content = &caps[2];
    let ordered = !matches!(marker, "-" | "*" | "+");
    let depth = indent / 2 + 1;

    // Deeper levels than the new item cannot continue; close them innermost
    // first, matching each closing tag to its opening kind.
    while state.list_stack.last().is_some_and(|top| top.depth > depth) {
        if let Some(level) = state.list_stack.pop() {
            close_list_level(&level, out);
        }
    }

    let open_new = match state.list_stack.last() {
        None => true,
        Some(top) => top.depth < depth || (top.depth == depth && top.ordered != ordered),
    };
    if open_new {
        out.push_str(&format!(
            "<{} style=\"list-style-type: {}\">\n",
            if ordered { "ol" } else { "ul" },
            list_style(ordered, depth)
        ));
        state.list_stack.push(ListLevel { ordered, depth });
    }

    if let Some(task) = RE_TASK_ITEM.captures(content) {
        out.push_str("<li><input type=\"checkbox\" disabled");
        if &task[1] != " " {
            out.push_str(" checked");
        }
        out.push_str("> ");
        out.push_str(&format_inline(&escape_html(&task[2])));
        out.push_str("</li>\n");
    } else {
        out.push_str("<li>");
        out.push_str(&format_inline(&escape_html(content)));
        out.push_str("</li>\n");
    }

    // One-line lookahead: no continuation line means this list (and any
    // sublist at or below the current indentation) is done.
    let list_ends = match next_line {
        None => true,
        Some(next) => next.trim().is_empty() || leading_spaces(next) < indent,
    };
    if list_ends {
        while state.list_stack.last().is_some_and(|top| top.depth >= depth) {
            if let Some(level) = state.list_stack.pop() {
                close_list_level(&level, out);
            }
        }
    }
}
