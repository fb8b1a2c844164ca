//! CLI binary for pdf-ocr-upload.
//!
//! A thin shim over the library crate: load the file, run the selection
//! guard, submit, and print the rendered result. The spinner is the
//! Pending-state busy indicator; it is cleared on every exit path.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_ocr_upload::{render, OcrUploader, SelectedFile, UploadConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic upload (endpoint from the environment)
  export OCR_API_URL=http://localhost:8080/ocr
  pdf-ocr report.pdf

  # Explicit endpoint
  pdf-ocr --endpoint http://ocr.internal:9000/process report.pdf

  # Raw JSON response for scripting
  pdf-ocr --json report.pdf > result.json

ENVIRONMENT VARIABLES:
  OCR_API_URL   OCR endpoint URL (same as --endpoint)
"#;

/// Upload a PDF to a remote OCR endpoint and print the extracted text.
#[derive(Parser, Debug)]
#[command(
    name = "pdf-ocr",
    version,
    about = "Upload a PDF to a remote OCR endpoint and print the per-page text",
    arg_required_else_help = true,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file to upload.
    input: PathBuf,

    /// OCR endpoint URL the file is POSTed to.
    #[arg(long, env = "OCR_API_URL")]
    endpoint: String,

    /// Print the raw JSON response instead of the rendered text.
    #[arg(long)]
    json: bool,

    /// Disable the busy spinner.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors and the result.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Configuration ────────────────────────────────────────────────────
    // An empty endpoint is a fatal startup condition, before any upload.
    let config = UploadConfig::new(&cli.endpoint).context("Invalid configuration")?;
    let mut uploader = OcrUploader::new(config);

    // ── Selection ────────────────────────────────────────────────────────
    let file = SelectedFile::from_path(&cli.input)
        .await
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    let name = file.name.clone();

    uploader.select(Some(file));
    if let Some(message) = uploader.state().error() {
        // The guard rejected the file; nothing was staged or sent.
        anyhow::bail!("{message}");
    }

    // ── Submission ───────────────────────────────────────────────────────
    let spinner = if !cli.quiet && !cli.no_progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(format!("Uploading {name}…"));
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    } else {
        None
    };

    uploader.submit().await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    // ── Result ───────────────────────────────────────────────────────────
    if let Some(response) = uploader.state().response() {
        if cli.json {
            let json = serde_json::to_string_pretty(response)
                .context("Failed to serialise response")?;
            println!("{json}");
        } else {
            let view = render::render_success(response);
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(view.as_bytes())
                .context("Failed to write to stdout")?;
        }
        if !cli.quiet && !cli.json {
            eprintln!("{} {}", green("✔"), bold(&render::banner(response.total_pages)));
        }
        return Ok(());
    }

    if let Some(message) = uploader.state().error() {
        eprintln!("{} {}", red("✗"), message);
        std::process::exit(1);
    }

    Ok(())
}
