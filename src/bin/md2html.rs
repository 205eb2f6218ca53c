//! CLI binary for md2html.
//!
//! A thin shim over the library crate that maps CLI flags to `RenderConfig`,
//! runs the read→render→write sequence, and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use md2html::{render_file, render_to_file, RenderConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (stdout)
  md2html README.md

  # Convert to file
  md2html README.md -o readme.html

  # Rewrite relative image paths against a CDN base
  md2html --image-base-url https://cdn.example.com/img docs/guide.md -o guide.html

  # JSON report (html + stats)
  md2html --json README.md > report.json

OUTPUT:
  The output is an HTML *fragment* — no <html>/<body> wrapper. Embed it in
  your own page template.

SUPPORTED SYNTAX:
  #…###### headings (optional {#anchor}), paragraphs, fenced code blocks,
  nested ordered/unordered/task lists, bold, italic, inline code, links,
  images, strikethrough.

ENVIRONMENT VARIABLES:
  MD2HTML_OUTPUT           Default output path
  MD2HTML_IMAGE_BASE_URL   Default image base URL
"#;

/// Convert a Markdown file to an embeddable HTML fragment.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a constrained Markdown subset to embeddable HTML fragments",
    long_about = "Convert a Markdown file to an HTML fragment using a small, predictable, \
single-pass renderer. Any input produces output: malformed Markdown degrades to plain \
paragraph text instead of failing.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown input file.
    input: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, env = "MD2HTML_OUTPUT")]
    output: Option<PathBuf>,

    /// Base URL prepended to relative image paths (absolute and data: URLs
    /// are left untouched).
    #[arg(long, env = "MD2HTML_IMAGE_BASE_URL")]
    image_base_url: Option<String>,

    /// Output a structured JSON report (html + stats) instead of raw HTML.
    #[arg(long, env = "MD2HTML_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2HTML_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2HTML_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = RenderConfig::builder();
    if let Some(base) = cli.image_base_url.clone() {
        builder = builder.image_base_url(base);
    }
    let config = builder.build();

    // ── Run conversion ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let stats = render_to_file(&cli.input, output_path, &config)
            .with_context(|| format!("Failed to convert '{}'", cli.input.display()))?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats).context("Failed to serialise stats")?
            );
        } else if !cli.quiet {
            eprintln!(
                "{} {} → {}  {}",
                green("✔"),
                cli.input.display(),
                bold(&output_path.display().to_string()),
                dim(&format!(
                    "{} bytes in / {} bytes out, {}ms",
                    stats.bytes_in, stats.bytes_out, stats.duration_ms
                )),
            );
        }
    } else {
        let output = render_file(&cli.input, &config)
            .with_context(|| format!("Failed to convert '{}'", cli.input.display()))?;

        if cli.json {
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
            println!("{json}");
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(output.html.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !output.html.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }
        }

        if !cli.quiet && !cli.json {
            eprintln!(
                "{}",
                dim(&format!(
                    "{} lines rendered in {}ms",
                    output.stats.lines, output.stats.duration_ms
                ))
            );
        }
    }

    Ok(())
}
