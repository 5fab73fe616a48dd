//! docpage — render `deno doc --json` output as a browsable single page.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `deno doc --json mod.ts | docpage -e mod.ts > mod.html`
//! - **file mode**: `docpage -o site docs/*.json`

use anyhow::{Context, Result};
use clap::Parser;
use docpage::page::DEFAULT_RELOAD_URL;
use docpage::{create_renderer, parse_payload, PageOptions, SinglePage};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "docpage",
    about = "Render deno doc JSON output as a browsable single-page view"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), markdown
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Entrypoint shown in the page header.
    /// Defaults to the input file name, or "stdin".
    #[arg(short = 'e', long)]
    entrypoint: Option<String>,

    /// Target of the page's reload link
    #[arg(long, default_value = DEFAULT_RELOAD_URL)]
    reload_url: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one payload from stdin, write the page to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let data = parse_payload(&input)
        .context("failed to decode documentation from stdin")?
        .map(Arc::new);
    let renderer = create_renderer(&cli.format)?;

    let entrypoint = cli.entrypoint.clone().unwrap_or_else(|| "stdin".to_string());
    let mut page = SinglePage::new(page_options(cli, entrypoint));
    print!("{}", page.render(data.as_ref(), renderer.as_ref()));
    Ok(())
}

/// file mode: render each input file into the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let renderer = create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let input_files = expand_globs(&cli.files)?;

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let data = parse_payload(&content)
            .with_context(|| format!("failed to decode documentation from {}", path.display()))?
            .map(Arc::new);

        let entrypoint = cli.entrypoint.clone().unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string())
        });
        let mut page = SinglePage::new(page_options(cli, entrypoint));
        let output = page.render(data.as_ref(), renderer.as_ref());

        let name = derive_output_name(&path.to_string_lossy());
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, &output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(input = %path.display(), output = %out_path.display(), "rendered page");
    }

    Ok(())
}

fn page_options(cli: &Cli, entrypoint: String) -> PageOptions {
    PageOptions {
        entrypoint,
        reload_url: cli.reload_url.clone(),
    }
}

/// File extensions recognized as documentation payloads.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directories are scanned non-recursively
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "docs/http.json" → "http"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit(['/', '\\']).next().unwrap_or(source);
    filename
        .strip_suffix(".json")
        .unwrap_or(filename)
        .to_string()
}
