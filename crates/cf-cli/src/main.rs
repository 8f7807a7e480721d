#![forbid(unsafe_code)]

//! Callflow CLI - summarize exported call-flow diagrams as Markdown.
//!
//! # Commands
//!
//! - `render`: Convert one diagram (or a folder of HTML exports) to Markdown
//! - `parse`: Output the parsed flow graph as JSON for tooling/debugging
//! - `detect`: Show the detected flow archetype

mod extract;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cf_core::FlowKind;
use cf_parser::parse;
use cf_render_md::{detect_flow_kind, render_document};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Callflow CLI - summarize exported call-flow diagrams as Markdown.
#[derive(Debug, Parser)]
#[command(
    name = "cf-cli",
    version,
    about = "Summarize exported call-flow diagrams as Markdown",
    long_about = "Turns auto-attendant and call-queue diagrams exported by the\n\
        telephony platform (HTML pages with an embedded mermaid block) into\n\
        structured Markdown summary documents."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a diagram, or batch-render a folder of HTML exports.
    Render {
        /// Input file, folder, or "-" for stdin. `.htm`/`.html` inputs have
        /// the diagram block extracted; anything else is raw diagram text.
        #[arg(default_value = "-")]
        input: String,

        /// Output file path (single input only). If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output directory for batch mode. Defaults to writing each
        /// document next to its source with a `.md` extension.
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Maximum number of files to process in batch mode.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit a JSON processing summary on stderr.
        #[arg(long)]
        json: bool,
    },

    /// Parse a diagram and output the graph (and diagnostics) as JSON.
    Parse {
        /// Input file or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Detect the flow archetype of a diagram.
    Detect {
        /// Input file or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Batch outcome counts, reported with `--json`.
#[derive(Debug, Serialize)]
struct BatchSummary {
    files: usize,
    rendered: usize,
    menu_tree: usize,
    queue: usize,
    unsupported: usize,
    failed: usize,
}

impl BatchSummary {
    fn from_outcomes(files: usize, outcomes: &[Option<FlowKind>]) -> Self {
        let mut summary = Self {
            files,
            rendered: 0,
            menu_tree: 0,
            queue: 0,
            unsupported: 0,
            failed: 0,
        };
        for outcome in outcomes {
            match outcome {
                Some(FlowKind::MenuTree) => {
                    summary.rendered += 1;
                    summary.menu_tree += 1;
                }
                Some(FlowKind::Queue) => {
                    summary.rendered += 1;
                    summary.queue += 1;
                }
                Some(FlowKind::Unsupported) => {
                    summary.rendered += 1;
                    summary.unsupported += 1;
                }
                None => summary.failed += 1,
            }
        }
        summary
    }
}

/// Result of detecting the flow archetype.
#[derive(Debug, Serialize)]
struct DetectResult {
    flow_kind: String,
    node_count: usize,
    edge_count: usize,
    diagnostic_count: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Render {
            input,
            output,
            out_dir,
            limit,
            json,
        } => cmd_render(&input, output.as_deref(), out_dir.as_deref(), limit, json),

        Command::Parse { input, pretty } => cmd_parse(&input, pretty),

        Command::Detect { input, json } => cmd_detect(&input, json),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init();
}

fn load_diagram(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }

    let path = Path::new(input);
    if path.exists() {
        read_diagram_file(path)
    } else {
        // Treat as inline diagram text
        Ok(input.to_string())
    }
}

fn read_diagram_file(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    if is_html_path(path) {
        let diagram = extract::extract_diagram_source(&raw)
            .with_context(|| format!("Failed to process {}", path.display()))?;
        Ok(diagram)
    } else {
        Ok(raw)
    }
}

fn is_html_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("htm") || ext.eq_ignore_ascii_case("html")
    )
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to: {}", path.display()))?;
            info!("Wrote output to: {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

// =============================================================================
// Command: render
// =============================================================================

fn cmd_render(
    input: &str,
    output: Option<&Path>,
    out_dir: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let path = Path::new(input);
    if input != "-" && path.is_dir() {
        return cmd_render_batch(path, out_dir, limit, json);
    }

    let source = load_diagram(input)?;
    let parsed = parse(&source);
    debug!(
        "Parsed: nodes={}, edges={}, diagnostics={}",
        parsed.graph.node_count(),
        parsed.graph.edge_count(),
        parsed.diagnostics.len()
    );
    for diagnostic in &parsed.diagnostics {
        warn!("Parse diagnostic: {diagnostic}");
    }

    let doc = render_document(&parsed.graph);
    info!("Rendered {} document", doc.kind.as_str());
    write_output(output, &doc.markdown)
}

fn cmd_render_batch(
    folder: &Path,
    out_dir: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let mut files = collect_export_files(folder)?;
    files.sort();
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    info!(
        "Found {} files to process in: {}",
        files.len(),
        folder.display()
    );

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    // Diagrams are processed in isolation; no state is shared between
    // files, so the batch fans out freely.
    let outcomes: Vec<Option<FlowKind>> = files
        .par_iter()
        .map(|file| match process_export(file, out_dir) {
            Ok(kind) => Some(kind),
            Err(error) => {
                warn!("Failed to process {}: {error:#}", file.display());
                None
            }
        })
        .collect();

    let summary = BatchSummary::from_outcomes(files.len(), &outcomes);
    if json {
        let json_str = serde_json::to_string_pretty(&summary)?;
        eprintln!("{json_str}");
    }
    info!(
        "Processed {} files: {} rendered ({} menu-tree, {} queue, {} unsupported), {} failed",
        summary.files,
        summary.rendered,
        summary.menu_tree,
        summary.queue,
        summary.unsupported,
        summary.failed
    );
    Ok(())
}

fn collect_export_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder: {}", folder.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read folder entry in: {}", folder.display()))?
            .path();
        if path.is_file() && is_html_path(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn process_export(file: &Path, out_dir: Option<&Path>) -> Result<FlowKind> {
    let source = read_diagram_file(file)?;
    let parsed = parse(&source);
    for diagnostic in &parsed.diagnostics {
        debug!("{}: {diagnostic}", file.display());
    }

    let doc = render_document(&parsed.graph);
    let target = output_path(file, out_dir);
    std::fs::write(&target, &doc.markdown)
        .with_context(|| format!("Failed to write to: {}", target.display()))?;
    info!("Saved: {}", target.display());
    Ok(doc.kind)
}

fn output_path(file: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir
            .join(file.file_name().unwrap_or_default())
            .with_extension("md"),
        None => file.with_extension("md"),
    }
}

// =============================================================================
// Command: parse
// =============================================================================

fn cmd_parse(input: &str, pretty: bool) -> Result<()> {
    let source = load_diagram(input)?;
    let parsed = parse(&source);

    let json_str = if pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    println!("{json_str}");
    Ok(())
}

// =============================================================================
// Command: detect
// =============================================================================

fn cmd_detect(input: &str, json: bool) -> Result<()> {
    let source = load_diagram(input)?;
    let parsed = parse(&source);
    let kind = detect_flow_kind(&parsed.graph);

    if json {
        let result = DetectResult {
            flow_kind: kind.as_str().to_string(),
            node_count: parsed.graph.node_count(),
            edge_count: parsed.graph.edge_count(),
            diagnostic_count: parsed.diagnostics.len(),
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", kind.as_str());
    }
    Ok(())
}
